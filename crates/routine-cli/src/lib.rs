//! Library side of the `csvtojson` converter.

pub mod commands;
pub mod logging;
pub mod types;
