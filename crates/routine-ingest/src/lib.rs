//! CSV ingestion for the routine converter.
//!
//! Decodes a headed CSV file into [`FlatRecord`](routine_model::FlatRecord)
//! rows. Columns are matched by header name, so their order does not matter
//! and any of them may be left out.

pub mod error;
pub mod header;
pub mod reader;

pub use error::{IngestError, Result};
pub use header::{HeaderReport, KNOWN_COLUMNS, inspect_header};
pub use reader::{read_records, read_records_from};
