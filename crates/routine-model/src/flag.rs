//! Categorical ingredient flags.
//!
//! Each CSV row carries six boolean columns. A set column maps to one
//! single-letter flag code in the output document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseFlagError;

/// Ingredient flag attached to products and routines.
///
/// Variant order is the check order used when deriving product flags
/// (A, S, B, C, E, P), and `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Flag {
    /// Contains alcohol.
    Alcohol,
    /// Contains sodium lauryl sulfate.
    Sls,
    /// Contains a vitamin B derivative.
    VitaminB,
    /// Contains a vitamin C derivative.
    VitaminC,
    /// Chemical or physical exfoliant.
    Exfoliant,
    /// Contains perfume or fragrance.
    Perfume,
}

impl Flag {
    /// All flags in check order.
    pub const ALL: [Flag; 6] = [
        Flag::Alcohol,
        Flag::Sls,
        Flag::VitaminB,
        Flag::VitaminC,
        Flag::Exfoliant,
        Flag::Perfume,
    ];

    /// Single-letter code written to the output document.
    pub fn code(&self) -> &'static str {
        match self {
            Flag::Alcohol => "A",
            Flag::Sls => "S",
            Flag::VitaminB => "B",
            Flag::VitaminC => "C",
            Flag::Exfoliant => "E",
            Flag::Perfume => "P",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Flag {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.code() == s)
            .ok_or_else(|| ParseFlagError {
                code: s.to_string(),
            })
    }
}

impl TryFrom<String> for Flag {
    type Error = ParseFlagError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Flag> for &'static str {
    fn from(flag: Flag) -> Self {
        flag.code()
    }
}
