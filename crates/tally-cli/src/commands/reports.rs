//! Report command implementations
//!
//! Each report asks the analyzer for numeric aggregates and renders them;
//! formatting ($-prefixes, column layout) lives here at the display
//! boundary, never in the analyzer. Empty-ledger results print a friendly
//! "no data" message rather than failing.

use anyhow::Result;
use serde::Serialize;
use tally_core::{Analyzer, Database};

use super::truncate;

const NO_DATA: &str = "   No expenses to analyze yet. Record some with 'tally add'!";

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn cmd_report_summary(db: &Database, json: bool) -> Result<()> {
    let Some(summary) = Analyzer::new(db).spending_summary()? else {
        println!("{}", NO_DATA);
        return Ok(());
    };

    if json {
        return print_json(&summary);
    }

    println!();
    println!("📊 Spending Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total Expenses: {}", summary.count);
    println!("   Total Spent: ${:.2}", summary.total);
    println!("   Average Expense: ${:.2}", summary.average);
    println!("   Largest Expense: ${:.2}", summary.largest);
    println!("   Smallest Expense: ${:.2}", summary.smallest);
    Ok(())
}

pub fn cmd_report_categories(db: &Database, json: bool) -> Result<()> {
    let Some(categories) = Analyzer::new(db).spending_by_category()? else {
        println!("{}", NO_DATA);
        return Ok(());
    };

    if json {
        return print_json(&categories);
    }

    println!();
    println!("📂 Spending by Category");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:20} │ {:>10} │ {:>6} │ {:>10}",
        "Category", "Total", "Count", "Average"
    );
    for c in &categories {
        println!(
            "   {:20} │ {:>10} │ {:>6} │ {:>10}",
            truncate(&c.category, 20),
            format!("${:.2}", c.total),
            c.count,
            format!("${:.2}", c.average)
        );
    }
    Ok(())
}

pub fn cmd_report_payments(db: &Database, json: bool) -> Result<()> {
    let Some(methods) = Analyzer::new(db).spending_by_payment_method()? else {
        println!("{}", NO_DATA);
        return Ok(());
    };

    if json {
        return print_json(&methods);
    }

    println!();
    println!("💳 Spending by Payment Method");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:20} │ {:>10} │ {:>6}", "Method", "Total", "Count");
    for m in &methods {
        println!(
            "   {:20} │ {:>10} │ {:>6}",
            truncate(&m.method, 20),
            format!("${:.2}", m.total),
            m.count
        );
    }
    Ok(())
}

pub fn cmd_report_monthly(db: &Database, json: bool) -> Result<()> {
    let Some(buckets) = Analyzer::new(db).monthly_trend()? else {
        println!("{}", NO_DATA);
        return Ok(());
    };

    if json {
        return print_json(&buckets);
    }

    println!();
    println!("📈 Monthly Spending Trend");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:8} │ {:>10} │ {:>6} │ {:>10}",
        "Month", "Total", "Count", "Average"
    );
    for b in &buckets {
        println!(
            "   {:8} │ {:>10} │ {:>6} │ {:>10}",
            b.label(),
            format!("${:.2}", b.total),
            b.count,
            format!("${:.2}", b.average)
        );
    }
    if buckets.len() == 1 {
        println!();
        println!("   (Only one month of data so far; trends need more history.)");
    }
    Ok(())
}

pub fn cmd_report_top(db: &Database, limit: usize, json: bool) -> Result<()> {
    let Some(top) = Analyzer::new(db).top_expenses(limit)? else {
        println!("{}", NO_DATA);
        return Ok(());
    };

    if json {
        return print_json(&top);
    }

    println!();
    println!("🏆 Top {} Most Expensive Purchases", top.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for (rank, e) in top.iter().enumerate() {
        println!(
            "   {}. {} │ {:>10} │ {:18} │ {}",
            rank + 1,
            e.date,
            format!("${:.2}", e.amount),
            truncate(&e.category, 18),
            truncate(&e.description, 30)
        );
    }
    Ok(())
}

pub fn cmd_report_percentages(db: &Database, json: bool) -> Result<()> {
    let Some(shares) = Analyzer::new(db).category_percentages()? else {
        println!("{}", NO_DATA);
        return Ok(());
    };

    if json {
        return print_json(&shares);
    }

    println!();
    println!("🥧 Spending Breakdown");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:20} │ {:>10} │ {:>7}",
        "Category", "Amount", "%"
    );
    for s in &shares {
        println!(
            "   {:20} │ {:>10} │ {:>6.2}%",
            truncate(&s.category, 20),
            format!("${:.2}", s.amount),
            s.percentage
        );
    }
    Ok(())
}

pub fn cmd_report_patterns(db: &Database, json: bool) -> Result<()> {
    let patterns = Analyzer::new(db).find_patterns()?;

    if json {
        return print_json(&patterns);
    }

    println!();
    println!("💡 Spending Patterns & Insights");
    println!("   ─────────────────────────────────────────────────────────────");
    if patterns.is_empty() {
        println!("   No findings yet; the ledger is empty.");
        return Ok(());
    }
    for pattern in &patterns {
        println!("   • {}", pattern);
    }
    Ok(())
}

/// The full seven-section analysis dashboard
pub fn cmd_dashboard(db: &Database) -> Result<()> {
    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💰 Tally Dashboard            │");
    println!("╰─────────────────────────────────────────╯");

    if db.count_expenses()? == 0 {
        println!();
        println!("{}", NO_DATA);
        return Ok(());
    }

    cmd_report_summary(db, false)?;
    cmd_report_categories(db, false)?;
    cmd_report_percentages(db, false)?;
    cmd_report_payments(db, false)?;
    cmd_report_top(db, 5, false)?;
    cmd_report_monthly(db, false)?;
    cmd_report_patterns(db, false)?;

    println!();
    Ok(())
}
