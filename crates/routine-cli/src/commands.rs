use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use routine_ingest::read_records;
use routine_output::write_entries;
use routine_transform::{AggregateOptions, aggregate_routines};
use tracing::{info, info_span, trace};

use crate::logging::redact_value;
use crate::types::{ConvertResult, RoutineSummary};

/// One conversion: CSV in, JSON out.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: AggregateOptions,
    /// Skip writing the output file.
    pub dry_run: bool,
}

impl ConvertRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options: AggregateOptions::default(),
            dry_run: false,
        }
    }

    pub fn with_options(mut self, options: AggregateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

pub fn run_convert(request: &ConvertRequest) -> Result<ConvertResult> {
    let convert_span = info_span!("convert", input = %request.input.display());
    let _convert_guard = convert_span.enter();

    // Stage 1: decode every CSV row
    let ingest_start = Instant::now();
    let records = info_span!("ingest")
        .in_scope(|| read_records(&request.input))
        .context("read input")?;
    info!(
        record_count = records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // Stage 2: group rows into routines
    let aggregate_start = Instant::now();
    let entries =
        info_span!("aggregate").in_scope(|| aggregate_routines(&records, &request.options));
    info!(
        routine_count = entries.len(),
        product_count = entries.product_count(),
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregate complete"
    );
    for routine in &entries.routines {
        trace!(
            title = %redact_value(&routine.title),
            sources = routine.sources.len(),
            products = routine.product_count(),
            "routine"
        );
    }

    // Stage 3: write the JSON document
    let output = if request.dry_run {
        info!(output = %request.output.display(), "dry run, output not written");
        None
    } else {
        let output_start = Instant::now();
        info_span!("output", path = %request.output.display())
            .in_scope(|| write_entries(&request.output, &entries))
            .context("write output")?;
        info!(
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
        Some(request.output.clone())
    };

    Ok(ConvertResult {
        input: request.input.clone(),
        output,
        record_count: records.len(),
        routines: entries.routines.iter().map(RoutineSummary::from).collect(),
    })
}
