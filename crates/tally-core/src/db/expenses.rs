//! Expense ledger operations

use rusqlite::{params, Row};
use tracing::debug;

use super::Database;
use crate::error::Result;
use crate::models::{Expense, NewExpense};

/// Snapshot ordering: newest date first, ties by ascending id.
/// Analysis tie-breaking is defined in terms of this order, so it must be
/// deterministic for a fixed ledger state.
const SNAPSHOT_ORDER: &str = "ORDER BY date DESC, id ASC";

fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        date: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        description: row.get(4)?,
        payment_method: row.get(5)?,
    })
}

impl Database {
    /// Insert an expense, returning the id the store assigned
    pub fn insert_expense(&self, expense: &NewExpense) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO expenses (date, amount, category, description, payment_method)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                expense.date,
                expense.amount,
                expense.category,
                expense.description,
                expense.payment_method,
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, "Inserted expense");
        Ok(id)
    }

    /// Delete an expense by id
    ///
    /// Returns false (not an error) when no row with that id exists.
    pub fn delete_expense(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        Ok(deleted > 0)
    }

    /// Full ledger scan, newest date first
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT id, date, amount, category, description, payment_method FROM expenses {}",
            SNAPSHOT_ORDER
        );
        let mut stmt = conn.prepare(&sql)?;
        let expenses = stmt
            .query_map([], row_to_expense)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(expenses)
    }

    /// Scan filtered by exact category match, same ordering as a full scan
    pub fn list_expenses_by_category(&self, category: &str) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT id, date, amount, category, description, payment_method FROM expenses WHERE category = ? {}",
            SNAPSHOT_ORDER
        );
        let mut stmt = conn.prepare(&sql)?;
        let expenses = stmt
            .query_map(params![category], row_to_expense)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(expenses)
    }

    /// Scan filtered by inclusive date range, same ordering as a full scan
    ///
    /// Bounds compare on the ISO-8601 date text, which sorts
    /// chronologically.
    pub fn list_expenses_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT id, date, amount, category, description, payment_method FROM expenses WHERE date BETWEEN ? AND ? {}",
            SNAPSHOT_ORDER
        );
        let mut stmt = conn.prepare(&sql)?;
        let expenses = stmt
            .query_map(params![start, end], row_to_expense)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(expenses)
    }

    /// Total number of expenses in the ledger
    pub fn count_expenses(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count)
    }
}
