//! Export command implementation

use std::path::Path;

use anyhow::{bail, Context, Result};
use tally_core::{export_expenses, Database, ExportFormat};

pub fn cmd_export(db: &Database, format: &str, output: Option<&Path>) -> Result<()> {
    let format: ExportFormat = match format.parse() {
        Ok(f) => f,
        Err(e) => bail!("{}", e),
    };

    let written = match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let written = export_expenses(db, format, file)?;
            println!("✓ Exported {} expenses to {}", written, path.display());
            written
        }
        None => export_expenses(db, format, std::io::stdout().lock())?,
    };

    if written == 0 && output.is_none() {
        eprintln!("(ledger is empty)");
    }
    Ok(())
}
