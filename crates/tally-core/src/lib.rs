//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - SQLite-backed expense ledger with migrations
//! - Analysis layer: summaries, groupings, rankings, pattern insights
//! - Ledger export (CSV, JSON)

pub mod analysis;
pub mod db;
pub mod error;
pub mod export;
pub mod models;

pub use analysis::Analyzer;
pub use db::Database;
pub use error::{Error, Result};
pub use export::{export_expenses, ExportFormat};
pub use models::{
    Category, CategoryShare, CategorySpending, Expense, MonthlySpending, NewExpense,
    PaymentMethod, PaymentMethodSpending, SpendingSummary, TopExpense,
};
