// Query runner - ad-hoc reads against the loaded table

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::fmt;

/// Result set of one ad-hoc query, with every value rendered as text.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join(" | "))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join(" | "))?;
        }
        Ok(())
    }
}

/// Execute `statement` verbatim, print the query text and its rows,
/// and return the result set. No validation is applied to the query.
pub fn run_query(statement: &str, conn: &Connection) -> Result<QueryResult> {
    println!("Executing Query: {}", statement);

    let mut stmt = conn
        .prepare(statement)
        .with_context(|| format!("Failed to prepare query: {}", statement))?;

    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let column_count = columns.len();

    let mut rows = Vec::new();
    let mut raw_rows = stmt
        .query([])
        .with_context(|| format!("Failed to execute query: {}", statement))?;

    while let Some(row) = raw_rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(render_value(row.get_ref(i)?));
        }
        rows.push(values);
    }

    let result = QueryResult { columns, rows };
    println!("{}", result);

    Ok(result)
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(_) => "<blob>".to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
