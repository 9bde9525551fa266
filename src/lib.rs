// Largest Banks ETL - Core Library
// Exposes all pipeline stages for use in the CLI binary and tests

pub mod extract;
pub mod load;
pub mod logger;
pub mod query;
pub mod rates;
pub mod transform;

// Re-export commonly used types
pub use extract::{extract, parse_banks, Bank};
pub use load::{load_to_csv, load_to_db};
pub use logger::log_progress;
pub use query::{run_query, QueryResult};
pub use rates::ExchangeRates;
pub use transform::transform;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PIPELINE CONSTANTS
// All paths, URLs and table names are fixed for the single-run batch job.
// ============================================================================

/// Archived snapshot of the Wikipedia "List of largest banks" page
pub const URL: &str =
    "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";

/// Side file mapping currency codes to USD exchange rates
pub const RATE_CSV_PATH: &str = "./exchange_rate.csv";

/// Destination for the transformed dataset
pub const CSV_PATH: &str = "./Largest_banks_data.csv";

/// SQLite database file
pub const DB_PATH: &str = "./Banks.db";

/// Table replaced wholesale on each run
pub const TABLE_NAME: &str = "Largest_banks";

/// Append-only run log
pub const LOG_PATH: &str = "./code_log.txt";
