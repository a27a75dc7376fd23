//! Pretty-printed JSON document writer.

use std::fs;
use std::path::Path;

use routine_model::Entries;
use tracing::debug;

use crate::error::{OutputError, Result};

/// Encode the document with two-space indentation and no trailing newline.
pub fn to_json_string(entries: &Entries) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Encode and write the document, replacing any existing file.
///
/// The file is created with the platform's default permissions.
pub fn write_entries(path: &Path, entries: &Entries) -> Result<()> {
    let json = to_json_string(entries)?;
    fs::write(path, &json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        bytes = json.len(),
        routine_count = entries.len(),
        "wrote routines"
    );
    Ok(())
}
