// Exchange rate table - currency code to USD multiplier
// Loaded wholesale from a side CSV, read-only for the rest of the run

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Currency")]
    currency: String,

    #[serde(rename = "Rate")]
    rate: f64,
}

/// Currency-code keyed view of the rate file.
///
/// Derived columns are looked up by code rather than by the file's row
/// order, so reordering the rate file cannot silently mislabel values.
#[derive(Debug, Clone)]
pub struct ExchangeRates {
    entries: Vec<(String, f64)>,
}

impl ExchangeRates {
    /// Load all rows from a CSV with header `Currency,Rate`.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut rdr = csv::Reader::from_path(path.as_ref())
            .with_context(|| format!("Failed to open rate file: {:?}", path.as_ref()))?;

        let mut entries = Vec::new();
        for result in rdr.deserialize() {
            let row: RateRow = result.context("Failed to parse rate file row")?;
            entries.push((row.currency, row.rate));
        }

        Ok(ExchangeRates { entries })
    }

    pub fn from_entries(entries: Vec<(String, f64)>) -> Self {
        ExchangeRates { entries }
    }

    /// Rate for a currency code, if the file listed it.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(currency, _)| currency == code)
            .map(|(_, rate)| *rate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
