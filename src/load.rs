// Loading - persist the transformed dataset as CSV and as a SQLite table

use crate::extract::Bank;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;

/// Write the full dataset to `csv_path`, overwriting any existing file.
///
/// The leading unnamed column is the positional index, matching the
/// header layout `,Name,MC_USD_Billion,MC_EUR_Billion,MC_GBP_Billion,MC_INR_Billion`.
pub fn load_to_csv<P: AsRef<Path>>(banks: &[Bank], csv_path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(csv_path.as_ref())
        .with_context(|| format!("Failed to create CSV file: {:?}", csv_path.as_ref()))?;

    wtr.write_record([
        "",
        "Name",
        "MC_USD_Billion",
        "MC_EUR_Billion",
        "MC_GBP_Billion",
        "MC_INR_Billion",
    ])?;

    for (index, bank) in banks.iter().enumerate() {
        wtr.write_record([
            index.to_string(),
            bank.name.clone(),
            bank.mc_usd_billion.to_string(),
            fmt_opt(bank.mc_eur_billion),
            fmt_opt(bank.mc_gbp_billion),
            fmt_opt(bank.mc_inr_billion),
        ])?;
    }

    wtr.flush()
        .with_context(|| format!("Failed to write CSV file: {:?}", csv_path.as_ref()))?;

    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Replace `table_name` with the dataset's current contents.
///
/// Drop-and-recreate semantics: any rows from a previous run are
/// discarded. Rows are written without a positional index column.
pub fn load_to_db(banks: &[Bank], conn: &Connection, table_name: &str) -> Result<()> {
    conn.execute(&format!("DROP TABLE IF EXISTS {}", table_name), [])
        .with_context(|| format!("Failed to drop table: {}", table_name))?;

    conn.execute(
        &format!(
            "CREATE TABLE {} (
                Name TEXT NOT NULL,
                MC_USD_Billion REAL NOT NULL,
                MC_EUR_Billion REAL,
                MC_GBP_Billion REAL,
                MC_INR_Billion REAL
            )",
            table_name
        ),
        [],
    )
    .with_context(|| format!("Failed to create table: {}", table_name))?;

    let mut stmt = conn.prepare(&format!(
        "INSERT INTO {} (
            Name, MC_USD_Billion, MC_EUR_Billion, MC_GBP_Billion, MC_INR_Billion
        ) VALUES (?1, ?2, ?3, ?4, ?5)",
        table_name
    ))?;

    for bank in banks {
        stmt.execute(params![
            bank.name,
            bank.mc_usd_billion,
            bank.mc_eur_billion,
            bank.mc_gbp_billion,
            bank.mc_inr_billion,
        ])
        .with_context(|| format!("Failed to insert row for bank: {}", bank.name))?;
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::ExchangeRates;
    use crate::transform::transform;

    fn converted_banks() -> Vec<Bank> {
        let rates = ExchangeRates::from_entries(vec![
            ("EUR".to_string(), 0.93),
            ("GBP".to_string(), 0.8),
            ("INR".to_string(), 82.95),
        ]);
        let banks = vec![
            Bank::new("JPMorgan Chase", 432.92),
            Bank::new("Bank of America", 231.52),
        ];
        transform(banks, &rates).unwrap()
    }

    #[test]
    fn test_csv_header_and_index_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Largest_banks_data.csv");

        load_to_csv(&converted_banks(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();

        assert_eq!(
            lines.next().unwrap(),
            ",Name,MC_USD_Billion,MC_EUR_Billion,MC_GBP_Billion,MC_INR_Billion"
        );
        assert!(lines.next().unwrap().starts_with("0,JPMorgan Chase,"));
        assert!(lines.next().unwrap().starts_with("1,Bank of America,"));
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Largest_banks_data.csv");
        let banks = converted_banks();

        load_to_csv(&banks, &path).unwrap();

        // Read back by header name; the unnamed index column is ignored
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let read_back: Vec<Bank> = rdr.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(read_back, banks);
    }

    #[test]
    fn test_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Largest_banks_data.csv");

        std::fs::write(&path, "stale contents from a previous run\n").unwrap();
        load_to_csv(&converted_banks(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(",Name,"));
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn test_db_load_writes_all_rows() {
        let conn = Connection::open_in_memory().unwrap();
        let banks = converted_banks();

        load_to_db(&banks, &conn, "Largest_banks").unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Largest_banks", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let (name, usd, gbp): (String, f64, f64) = conn
            .query_row(
                "SELECT Name, MC_USD_Billion, MC_GBP_Billion FROM Largest_banks LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(name, "JPMorgan Chase");
        assert_eq!(usd, 432.92);
        assert_eq!(gbp, 346.34);
    }

    #[test]
    fn test_db_load_replaces_previous_table() {
        let conn = Connection::open_in_memory().unwrap();

        // First run: a table with different contents
        load_to_db(&converted_banks(), &conn, "Largest_banks").unwrap();

        // Second run replaces it wholesale
        let second_run = vec![Bank::new("Only Bank", 1.0)];
        load_to_db(&second_run, &conn, "Largest_banks").unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Largest_banks", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);

        let name: String = conn
            .query_row("SELECT Name FROM Largest_banks", [], |row| row.get(0))
            .unwrap();
        assert_eq!(name, "Only Bank");
    }

    #[test]
    fn test_db_rows_preserve_extraction_order() {
        let conn = Connection::open_in_memory().unwrap();
        load_to_db(&converted_banks(), &conn, "Largest_banks").unwrap();

        let mut stmt = conn.prepare("SELECT Name FROM Largest_banks").unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(names, vec!["JPMorgan Chase", "Bank of America"]);
    }
}
