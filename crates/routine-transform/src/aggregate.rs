//! Grouping of flat records into one routine per person.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use routine_model::{Entries, Flag, FlatRecord, Period, Product, Routine, Steps};
use tracing::{debug, info, trace};

use crate::ingredients::split_ingredients;
use crate::options::AggregateOptions;
use crate::sources::SourceSet;

/// In-progress routine for one person.
#[derive(Debug, Default)]
struct RoutineBuilder {
    title: String,
    sources: SourceSet,
    flags: BTreeSet<Flag>,
    steps: Steps,
}

impl RoutineBuilder {
    fn build(self) -> Routine {
        Routine {
            title: self.title,
            sources: self.sources.into_vec(),
            flags: self.flags.into_iter().collect(),
            steps: self.steps,
        }
    }
}

/// Accumulates flat records into per-person routines.
///
/// Routines come out in the order their person was first seen. Routine flags
/// are emitted in check order and sources in first-seen order; product lists
/// keep input order.
#[derive(Debug, Default)]
pub struct RoutineAggregator {
    options: AggregateOptions,
    index: HashMap<String, usize>,
    builders: Vec<RoutineBuilder>,
    records_seen: usize,
}

impl RoutineAggregator {
    pub fn new(options: AggregateOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Fold one record into its person's routine.
    pub fn push(&mut self, record: &FlatRecord) {
        let record_index = self.records_seen;
        self.records_seen += 1;

        let slot = match self.index.entry(record.person.clone()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                debug!(record_index, "new person");
                self.builders.push(RoutineBuilder::default());
                *entry.insert(self.builders.len() - 1)
            }
        };
        let builder = &mut self.builders[slot];
        builder.title.clone_from(&record.person);

        for period in Period::ALL {
            let link = record.source_link(period);
            if !link.is_empty() {
                builder.sources.insert(link);
            }
        }

        let flags = record.flags();
        builder.flags.extend(flags.iter().copied());

        for period in Period::ALL {
            let fields = record.product_fields(period);
            if fields.name.is_empty() {
                continue;
            }
            let product = Product {
                name: fields.name.to_string(),
                link: fields.link.to_string(),
                kind: fields.kind.to_string(),
                ingredients: split_ingredients(fields.ingredients, self.options.empty_ingredients),
                flags: flags.clone(),
            };
            trace!(
                record_index,
                period = %period,
                ingredient_count = product.ingredients.len(),
                "append product"
            );
            builder.steps.push(period, product);
        }
    }

    /// Number of distinct persons seen so far.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Number of records pushed so far.
    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// Materialize the collected routines.
    pub fn finish(self) -> Entries {
        let entries = Entries {
            routines: self
                .builders
                .into_iter()
                .map(RoutineBuilder::build)
                .collect(),
        };
        info!(
            record_count = self.records_seen,
            routine_count = entries.len(),
            product_count = entries.product_count(),
            "aggregation complete"
        );
        entries
    }
}

impl<'a> Extend<&'a FlatRecord> for RoutineAggregator {
    fn extend<I: IntoIterator<Item = &'a FlatRecord>>(&mut self, records: I) {
        for record in records {
            self.push(record);
        }
    }
}

/// Aggregate a full batch of records in one pass.
pub fn aggregate_routines(records: &[FlatRecord], options: &AggregateOptions) -> Entries {
    let mut aggregator = RoutineAggregator::new(*options);
    aggregator.extend(records);
    aggregator.finish()
}
