//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track expenses and understand where the money goes
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal expense tracker with spending analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a new expense
    Add {
        /// Amount spent (must be positive)
        #[arg(short, long)]
        amount: f64,

        /// Category (Food & Dining, Transportation, Shopping, Entertainment,
        /// Bills & Utilities, Healthcare, Other)
        #[arg(short, long)]
        category: String,

        /// Payment method (Cash, Credit Card, Debit Card, Digital Wallet)
        #[arg(short, long)]
        payment: String,

        /// Date in YYYY-MM-DD form (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List expenses, optionally filtered
    List {
        /// Only expenses in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Range start, inclusive (YYYY-MM-DD; requires --to)
        #[arg(long)]
        from: Option<String>,

        /// Range end, inclusive (YYYY-MM-DD; requires --from)
        #[arg(long)]
        to: Option<String>,

        /// Show at most this many expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense by id
    Delete {
        /// Expense id to delete
        id: i64,
    },

    /// Show the full analysis dashboard
    Dashboard,

    /// Run a single report
    Report {
        /// Print the report as JSON instead of a table
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        action: ReportAction,
    },

    /// Export the ledger to CSV or JSON
    Export {
        /// Output format: csv or json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show database status (path, size, record count)
    Status,
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// Overall spending summary
    Summary,

    /// Spending grouped by category
    Categories,

    /// Spending grouped by payment method
    Payments,

    /// Monthly spending trend
    Monthly,

    /// Largest expenses
    Top {
        /// How many expenses to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Each category's percentage of total spending
    Percentages,

    /// Spending patterns and insights
    Patterns,
}
