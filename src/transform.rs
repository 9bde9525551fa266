// Transformation - derive EUR/GBP/INR market caps from the USD figure

use crate::extract::Bank;
use crate::rates::ExchangeRates;
use anyhow::{Context, Result};

/// The three derived currency columns, keyed by code.
const TARGET_CURRENCIES: [&str; 3] = ["EUR", "GBP", "INR"];

/// Fill the derived currency fields on every record.
///
/// Each target currency's value is `round2(mc_usd_billion * rate)` where
/// the rate is looked up by currency code. Fields that are already set
/// are left untouched, so re-running the transform is a no-op. A rate
/// file that does not list one of the target codes aborts the run.
pub fn transform(mut banks: Vec<Bank>, rates: &ExchangeRates) -> Result<Vec<Bank>> {
    for code in TARGET_CURRENCIES {
        let rate = rates
            .rate(code)
            .with_context(|| format!("Rate file has no entry for currency: {}", code))?;

        for bank in &mut banks {
            let field = match code {
                "EUR" => &mut bank.mc_eur_billion,
                "GBP" => &mut bank.mc_gbp_billion,
                "INR" => &mut bank.mc_inr_billion,
                _ => unreachable!(),
            };

            if field.is_none() {
                *field = Some(round2(bank.mc_usd_billion * rate));
            }
        }
    }

    Ok(banks)
}

/// Round to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================
