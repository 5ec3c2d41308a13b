//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Database status

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{Analyzer, Database};
use tracing::debug;

/// Open (or create) the database at the given path
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    debug!(path = path_str, "Opening database");
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let _db = open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record an expense: tally add --amount 12.50 --category food --payment cash");
    println!("  2. See where it goes: tally dashboard");

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    use std::fs;

    println!();
    println!("📊 Tally Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }

        let db = open_db(db_path)?;
        println!("   Expenses tracked: {}", db.count_expenses()?);
        if let Some(summary) = Analyzer::new(&db).spending_summary()? {
            println!("   Total spent: ${:.2}", summary.total);
        }
    } else {
        println!("   Size: (database not initialized)");
        println!();
        println!("   Run 'tally init' to get started.");
    }

    println!();
    Ok(())
}
