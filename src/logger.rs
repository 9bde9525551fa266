// Run log - timestamped stage transitions
// One line per pipeline stage, appended to a plain-text file

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Timestamp layout for log lines, e.g. `2023-Sep-08-09:16:35`
const TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// Append `<timestamp> : <message>` to the log file at `path`,
/// creating the file if it does not exist yet.
pub fn log_progress<P: AsRef<Path>>(path: P, message: &str) -> Result<()> {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())
        .with_context(|| format!("Failed to open log file: {:?}", path.as_ref()))?;

    writeln!(file, "{} : {}", timestamp, message)
        .with_context(|| format!("Failed to write to log file: {:?}", path.as_ref()))?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
