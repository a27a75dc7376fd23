//! Header inspection.

use csv::StringRecord;

/// Columns decoded into [`FlatRecord`](routine_model::FlatRecord).
pub const KNOWN_COLUMNS: [&str; 17] = [
    "person",
    "morning_product",
    "morning_product_ingredients",
    "morning_product_type",
    "morning_product_link",
    "night_product",
    "night_product_ingredients",
    "night_product_type",
    "night_product_link",
    "alcohol",
    "sls",
    "perfume",
    "vitamin_c",
    "vitamin_b",
    "exfoliant",
    "link_morning",
    "link_night",
];

/// How a header row lines up with [`KNOWN_COLUMNS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderReport {
    /// Known columns present, in header order.
    pub known: Vec<String>,
    /// Known columns absent from the header.
    pub missing: Vec<&'static str>,
    /// Header names that are not known columns; they are ignored.
    pub unknown: Vec<String>,
    /// Known columns named more than once, each listed once.
    pub duplicates: Vec<String>,
}

impl HeaderReport {
    pub fn has_known_columns(&self) -> bool {
        !self.known.is_empty()
    }
}

/// Compare a header row against the known columns.
pub fn inspect_header(headers: &StringRecord) -> HeaderReport {
    let mut report = HeaderReport::default();
    for name in headers.iter() {
        let name = name.trim_matches('\u{feff}');
        if KNOWN_COLUMNS.contains(&name) {
            if report.known.iter().any(|known| known == name) {
                if !report.duplicates.iter().any(|duplicate| duplicate == name) {
                    report.duplicates.push(name.to_string());
                }
                continue;
            }
            report.known.push(name.to_string());
        } else {
            report.unknown.push(name.to_string());
        }
    }
    report.missing = KNOWN_COLUMNS
        .iter()
        .copied()
        .filter(|column| !report.known.iter().any(|known| known.as_str() == *column))
        .collect();
    report
}
