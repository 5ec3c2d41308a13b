//! Ledger export
//!
//! Writes the full expense ledger to CSV or JSON for use outside the tool.
//! Export is a read-only view of the store; it is not an alternative
//! persistence format.

use std::io::Write;

use crate::db::Database;
use crate::error::Result;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {} (valid: csv, json)", s)),
        }
    }
}

/// Write every expense to `writer` in the requested format
///
/// Returns the number of records written. Records appear in snapshot
/// order (newest date first).
pub fn export_expenses<W: Write>(
    db: &Database,
    format: ExportFormat,
    writer: W,
) -> Result<usize> {
    let expenses = db.list_expenses()?;

    match format {
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for expense in &expenses {
                csv_writer.serialize(expense)?;
            }
            csv_writer.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(writer, &expenses)?;
        }
    }

    Ok(expenses.len())
}
