use std::path::PathBuf;

use routine_model::{Flag, Routine};

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub record_count: usize,
    pub routines: Vec<RoutineSummary>,
}

impl ConvertResult {
    pub fn product_count(&self) -> usize {
        self.routines
            .iter()
            .map(|summary| summary.morning + summary.evening)
            .sum()
    }
}

/// Per-routine counts shown in the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineSummary {
    pub title: String,
    pub sources: usize,
    pub flags: Vec<Flag>,
    pub morning: usize,
    pub evening: usize,
}

impl From<&Routine> for RoutineSummary {
    fn from(routine: &Routine) -> Self {
        Self {
            title: routine.title.clone(),
            sources: routine.sources.len(),
            flags: routine.flags.clone(),
            morning: routine.steps.morning.len(),
            evening: routine.steps.evening.len(),
        }
    }
}
