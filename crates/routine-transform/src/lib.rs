//! Aggregation of flat CSV rows into nested routines.
//!
//! Rows are grouped by person. Each person's source links and flags are
//! collected as sets, and each row with a morning or night product name
//! appends one product to the matching step list.

pub mod aggregate;
pub mod ingredients;
pub mod options;
pub mod sources;

pub use aggregate::{RoutineAggregator, aggregate_routines};
pub use ingredients::split_ingredients;
pub use options::{AggregateOptions, EmptyIngredients};
pub use sources::SourceSet;
