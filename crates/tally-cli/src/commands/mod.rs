//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init, status) and shared utilities (open_db)
//! - `expenses` - Expense entry commands (add, list, delete)
//! - `export` - Ledger export command
//! - `reports` - Dashboard and report commands

pub mod core;
pub mod expenses;
pub mod export;
pub mod reports;

// Re-export command functions for main.rs
pub use core::*;
pub use expenses::*;
pub use export::*;
pub use reports::*;

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated
///
/// Counts characters rather than bytes: descriptions and categories are
/// free text, and a byte-index cut could land inside a multi-byte UTF-8
/// character and panic.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
