//! Nested output document: routines, steps and products.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::flag::Flag;

/// Time of day a product is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    Morning,
    Evening,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Morning, Period::Evening];

    /// Key used for the step list in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Evening => "Evening",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product step in a routine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ingredients: Vec<String>,
    /// Flags of the row this product came from, in check order.
    pub flags: Vec<Flag>,
}

/// Ordered product lists per period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Steps {
    #[serde(rename = "Morning")]
    pub morning: Vec<Product>,
    #[serde(rename = "Evening")]
    pub evening: Vec<Product>,
}

impl Steps {
    pub fn products(&self, period: Period) -> &[Product] {
        match period {
            Period::Morning => &self.morning,
            Period::Evening => &self.evening,
        }
    }

    /// Append a product to the end of the period's list.
    pub fn push(&mut self, period: Period, product: Product) {
        match period {
            Period::Morning => self.morning.push(product),
            Period::Evening => self.evening.push(product),
        }
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.evening.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.evening.is_empty()
    }
}

/// All products collected for one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// Person identifier.
    pub title: String,
    /// Distinct source links.
    pub sources: Vec<String>,
    /// Distinct flags seen across all of the person's rows.
    pub flags: Vec<Flag>,
    pub steps: Steps,
}

impl Routine {
    pub fn product_count(&self) -> usize {
        self.steps.len()
    }
}

/// Top-level output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entries {
    pub routines: Vec<Routine>,
}

impl Entries {
    /// Find the routine for a person identifier.
    pub fn routine(&self, title: &str) -> Option<&Routine> {
        self.routines.iter().find(|routine| routine.title == title)
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Total number of products across all routines.
    pub fn product_count(&self) -> usize {
        self.routines.iter().map(Routine::product_count).sum()
    }
}
