//! JSON output for aggregated routines.

pub mod error;
pub mod json;

pub use error::{OutputError, Result};
pub use json::{to_json_string, write_entries};
