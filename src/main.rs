// Largest Banks ETL - single-run batch pipeline
// Extract -> Transform -> Load (CSV + SQLite) -> Queries, strictly sequential

use anyhow::Result;
use rusqlite::Connection;

use banks_etl::{
    extract, load_to_csv, load_to_db, log_progress, run_query, transform, ExchangeRates, CSV_PATH,
    DB_PATH, LOG_PATH, RATE_CSV_PATH, TABLE_NAME, URL,
};

fn main() -> Result<()> {
    log_progress(LOG_PATH, "Preliminaries complete. Initiating ETL process.")?;

    // Step 1: Data extraction
    let banks = extract(URL)?;
    println!("Extracted {} banks from {}", banks.len(), URL);
    log_progress(
        LOG_PATH,
        "Data extraction complete. Initiating Transformation process.",
    )?;

    // Step 2: Data transformation
    let rates = ExchangeRates::from_csv(RATE_CSV_PATH)?;
    let banks = transform(banks, &rates)?;
    log_progress(
        LOG_PATH,
        "Data transformation complete. Initiating Loading process.",
    )?;

    // Step 3: Load data to CSV
    load_to_csv(&banks, CSV_PATH)?;
    log_progress(LOG_PATH, "Data saved to CSV file.")?;

    // Step 4: Load data to SQLite database
    let conn = Connection::open(DB_PATH)?;
    log_progress(LOG_PATH, "SQL Connection initiated.")?;

    load_to_db(&banks, &conn, TABLE_NAME)?;
    log_progress(
        LOG_PATH,
        "Data loaded to Database as a table, Executing queries.",
    )?;

    // Step 5: Run the fixed queries against the loaded table
    run_query(&format!("SELECT * FROM {}", TABLE_NAME), &conn)?;
    run_query(
        &format!(
            "SELECT AVG(MC_GBP_Billion) AS Avg_Market_Cap_GBP FROM {}",
            TABLE_NAME
        ),
        &conn,
    )?;
    run_query(&format!("SELECT Name FROM {} LIMIT 5", TABLE_NAME), &conn)?;

    log_progress(LOG_PATH, "Process Complete.")?;

    // Step 6: Close the database connection
    drop(conn);
    log_progress(LOG_PATH, "Server Connection closed.")?;

    Ok(())
}
