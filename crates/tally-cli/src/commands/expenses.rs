//! Expense entry command implementations (add, list, delete)

use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use tally_core::models::DATE_FORMAT;
use tally_core::{Category, Database, NewExpense, PaymentMethod};

use super::truncate;

/// Record a new expense
///
/// Entry is where the fixed option sets apply: `category` and `payment`
/// must name a known [`Category`] / [`PaymentMethod`] (matching is
/// case-insensitive and accepts short aliases like "food" or "credit").
/// The date defaults to today.
pub fn cmd_add(
    db: &Database,
    amount: f64,
    category: &str,
    payment: &str,
    date: Option<&str>,
    description: &str,
) -> Result<()> {
    let category: Category = match category.parse() {
        Ok(c) => c,
        Err(e) => bail!("{}", e),
    };
    let payment: PaymentMethod = match payment.parse() {
        Ok(p) => p,
        Err(e) => bail!("{}", e),
    };

    let date = match date {
        Some(d) => d.to_string(),
        None => Utc::now().date_naive().format(DATE_FORMAT).to_string(),
    };

    let expense = NewExpense {
        date,
        amount,
        category: category.as_str().to_string(),
        description: description.to_string(),
        payment_method: payment.as_str().to_string(),
    };
    expense.validate()?;

    let id = db.insert_expense(&expense)?;

    println!(
        "✓ Expense #{} added: {} ${:.2} ({}, {})",
        id, expense.date, expense.amount, category, payment
    );
    Ok(())
}

/// List expenses, optionally filtered by category or inclusive date range
pub fn cmd_list(
    db: &Database,
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let (expenses, heading) = match (category, from, to) {
        (Some(cat), None, None) => (
            db.list_expenses_by_category(cat)?,
            format!("Expenses in {}", cat),
        ),
        (None, Some(from), Some(to)) => {
            for bound in [from, to] {
                if NaiveDate::parse_from_str(bound, DATE_FORMAT).is_err() {
                    bail!("Invalid date '{}' (expected YYYY-MM-DD)", bound);
                }
            }
            (
                db.list_expenses_by_date_range(from, to)?,
                format!("Expenses from {} to {}", from, to),
            )
        }
        (None, None, None) => (db.list_expenses()?, "All Expenses".to_string()),
        (Some(_), _, _) => bail!("--category cannot be combined with --from/--to"),
        _ => bail!("--from and --to must be given together"),
    };

    if expenses.is_empty() {
        println!("No expenses found. Record one with:");
        println!("  tally add --amount 12.50 --category food --payment cash");
        return Ok(());
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let count = expenses.len();
    let shown = limit.map_or(count, |l| l.min(count));

    println!();
    println!("📝 {}", heading);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:>5} │ {:10} │ {:>10} │ {:18} │ {}",
        "ID", "Date", "Amount", "Category", "Description"
    );

    for expense in expenses.iter().take(shown) {
        println!(
            "   {:>5} │ {:10} │ {:>10} │ {:18} │ {}",
            expense.id,
            expense.date,
            format!("${:.2}", expense.amount),
            truncate(&expense.category, 18),
            truncate(&expense.description, 30)
        );
    }

    println!();
    if shown < count {
        println!("   Showing {} of {} expenses", shown, count);
    }
    println!("   Total: ${:.2} across {} expenses", total, count);
    Ok(())
}

/// Delete an expense by id, reporting not-found distinctly
pub fn cmd_delete(db: &Database, id: i64) -> Result<()> {
    if db.delete_expense(id)? {
        println!("✓ Expense #{} deleted", id);
    } else {
        println!("❌ No expense found with id {}", id);
    }
    Ok(())
}
