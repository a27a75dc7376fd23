//! Flat CSV input rows.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use crate::flag::Flag;
use crate::routine::Period;

/// One CSV row: a data source's contribution to one person's routine.
///
/// Field names match the CSV header. Every column is optional; a missing
/// column or empty cell decodes to the empty string or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatRecord {
    pub person: String,

    pub morning_product: String,
    pub morning_product_ingredients: String,
    pub morning_product_type: String,
    pub morning_product_link: String,

    pub night_product: String,
    pub night_product_ingredients: String,
    pub night_product_type: String,
    pub night_product_link: String,

    #[serde(deserialize_with = "deserialize_text_bool")]
    pub alcohol: bool,
    #[serde(deserialize_with = "deserialize_text_bool")]
    pub sls: bool,
    #[serde(deserialize_with = "deserialize_text_bool")]
    pub perfume: bool,
    #[serde(deserialize_with = "deserialize_text_bool")]
    pub vitamin_c: bool,
    #[serde(deserialize_with = "deserialize_text_bool")]
    pub vitamin_b: bool,
    #[serde(deserialize_with = "deserialize_text_bool")]
    pub exfoliant: bool,

    pub link_morning: String,
    pub link_night: String,
}

/// Borrowed view of the product columns for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductFields<'a> {
    pub name: &'a str,
    pub link: &'a str,
    pub kind: &'a str,
    pub ingredients: &'a str,
}

impl FlatRecord {
    /// Returns whether the given flag column is set.
    pub fn has_flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Alcohol => self.alcohol,
            Flag::Sls => self.sls,
            Flag::VitaminB => self.vitamin_b,
            Flag::VitaminC => self.vitamin_c,
            Flag::Exfoliant => self.exfoliant,
            Flag::Perfume => self.perfume,
        }
    }

    /// Flags set on this row, in check order (A, S, B, C, E, P).
    pub fn flags(&self) -> Vec<Flag> {
        Flag::ALL
            .into_iter()
            .filter(|flag| self.has_flag(*flag))
            .collect()
    }

    /// Product columns for the morning or night step.
    pub fn product_fields(&self, period: Period) -> ProductFields<'_> {
        match period {
            Period::Morning => ProductFields {
                name: &self.morning_product,
                link: &self.morning_product_link,
                kind: &self.morning_product_type,
                ingredients: &self.morning_product_ingredients,
            },
            Period::Evening => ProductFields {
                name: &self.night_product,
                link: &self.night_product_link,
                kind: &self.night_product_type,
                ingredients: &self.night_product_ingredients,
            },
        }
    }

    /// Source link column for the period (`link_morning` / `link_night`).
    pub fn source_link(&self, period: Period) -> &str {
        match period {
            Period::Morning => &self.link_morning,
            Period::Evening => &self.link_night,
        }
    }
}

/// Parse a boolean cell.
///
/// The cell is trimmed first. Accepts `yes`/`no` in any case, the empty
/// string as `false`, and `1 t T TRUE true True` / `0 f F FALSE false False`.
pub fn parse_text_bool(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("yes") {
        return Some(true);
    }
    if value.is_empty() || value.eq_ignore_ascii_case("no") {
        return Some(false);
    }
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn deserialize_text_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_text_bool(&raw).ok_or_else(|| {
        de::Error::invalid_value(
            Unexpected::Str(&raw),
            &"a boolean (true/false, t/f, 1/0, yes/no or empty)",
        )
    })
}
