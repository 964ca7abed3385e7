//! Human-readable order numbers.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

const PREFIX: &str = "DIA";

/// Display reference of an order: `DIA` + `YYMMDD` + three random digits.
///
/// Two orders placed on the same day can share a number. The backend keys
/// orders by [`common::OrderId`]; this value is only a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generates a number for an order placed on `date`.
    pub fn generate<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> Self {
        let suffix: u16 = rng.gen_range(0..1000);
        Self(format!(
            "{PREFIX}{:02}{:02}{:02}{suffix:03}",
            date.year().rem_euclid(100),
            date.month(),
            date.day(),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
