//! Data model for the routine converter.
//!
//! [`FlatRecord`] is one CSV row: a single data source's contribution to a
//! person's morning and/or evening routine. [`Entries`] is the nested
//! document produced from those rows, one [`Routine`] per person.

pub mod error;
pub mod flag;
pub mod record;
pub mod routine;

pub use error::ParseFlagError;
pub use flag::Flag;
pub use record::{FlatRecord, ProductFields, parse_text_bool};
pub use routine::{Entries, Period, Product, Routine, Steps};
