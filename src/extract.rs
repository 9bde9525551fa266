// Extraction - archived Wikipedia page to bank records
// Fetches the page over HTTP and parses the first table body into rows

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One bank row from the source table.
///
/// `mc_usd_billion` is captured during extraction; the three derived
/// currency fields start out `None` and are filled by the transformer.
/// The column set only grows - nothing is ever removed from a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: f64,

    #[serde(rename = "MC_EUR_Billion")]
    pub mc_eur_billion: Option<f64>,

    #[serde(rename = "MC_GBP_Billion")]
    pub mc_gbp_billion: Option<f64>,

    #[serde(rename = "MC_INR_Billion")]
    pub mc_inr_billion: Option<f64>,
}

impl Bank {
    pub fn new(name: impl Into<String>, mc_usd_billion: f64) -> Self {
        Bank {
            name: name.into(),
            mc_usd_billion,
            mc_eur_billion: None,
            mc_gbp_billion: None,
            mc_inr_billion: None,
        }
    }
}

/// Fetch `url` and extract the bank dataset from its first table body.
///
/// Single GET, no retries: a transport failure aborts the run.
pub fn extract(url: &str) -> Result<Vec<Bank>> {
    let html = fetch_page(url)?;
    parse_banks(&html)
}

fn fetch_page(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch page: {}", url))?;

    response
        .error_for_status()
        .with_context(|| format!("Server returned an error for: {}", url))?
        .text()
        .context("Failed to read response body")
}

/// Parse the banks table out of a full HTML document.
///
/// Walks the rows of the first `<tbody>` in document order. A row
/// contributes a record only if it has exactly three `<td>` cells:
/// the second cell is the bank name, the third the USD market cap in
/// billions. Rows with any other cell count (header rows, footnotes,
/// spanning rows) are skipped without a signal.
pub fn parse_banks(html: &str) -> Result<Vec<Bank>> {
    let document = Html::parse_document(html);

    let tbody_selector = Selector::parse("tbody").expect("valid selector");
    let tr_selector = Selector::parse("tr").expect("valid selector");
    let td_selector = Selector::parse("td").expect("valid selector");

    let tbody = document
        .select(&tbody_selector)
        .next()
        .context("No table body found in document")?;

    let mut banks = Vec::new();

    for row in tbody.select(&tr_selector) {
        let cells: Vec<ElementRef> = row.select(&td_selector).collect();
        if cells.len() != 3 {
            continue;
        }

        let name = cell_text(&cells[1]);
        let market_cap = cell_text(&cells[2]);
        let mc_usd_billion: f64 = market_cap
            .parse()
            .with_context(|| format!("Invalid market cap value for '{}': '{}'", name, market_cap))?;

        banks.push(Bank::new(name, mc_usd_billion));
    }

    Ok(banks)
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

// ============================================================================
// TESTS
// ============================================================================
