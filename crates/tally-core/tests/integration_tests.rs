//! Integration tests for tally-core
//!
//! These tests exercise the full insert → analyze workflow against a real
//! database, including the reconciliation properties the analysis layer
//! guarantees (category sums matching the grand total, trend buckets
//! partitioning the ledger, percentages summing to ~100).

use tally_core::{Analyzer, Database, NewExpense};

fn expense(date: &str, amount: f64, category: &str, payment: &str) -> NewExpense {
    NewExpense {
        date: date.to_string(),
        amount,
        category: category.to_string(),
        description: String::new(),
        payment_method: payment.to_string(),
    }
}

/// The three-record ledger used as the reference scenario throughout
fn seeded_db() -> Database {
    let db = Database::in_memory().expect("Failed to create test database");
    db.insert_expense(&expense("2024-01-01", 50.0, "Food", "Cash"))
        .unwrap();
    db.insert_expense(&expense("2024-01-05", 150.0, "Food", "Credit Card"))
        .unwrap();
    db.insert_expense(&expense("2024-02-01", 20.0, "Transport", "Cash"))
        .unwrap();
    db
}

#[test]
fn test_reference_scenario_end_to_end() {
    let db = seeded_db();
    let analyzer = Analyzer::new(&db);

    let summary = analyzer.spending_summary().unwrap().unwrap();
    assert_eq!(summary.total, 220.0);
    assert_eq!(summary.count, 3);

    let categories = analyzer.spending_by_category().unwrap().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].category, "Food");
    assert_eq!(categories[0].total, 200.0);
    assert_eq!(categories[0].count, 2);
    assert_eq!(categories[0].average, 100.0);
    assert_eq!(categories[1].category, "Transport");
    assert_eq!(categories[1].total, 20.0);
    assert_eq!(categories[1].count, 1);
    assert_eq!(categories[1].average, 20.0);

    let trend = analyzer.monthly_trend().unwrap().unwrap();
    assert_eq!(trend.len(), 2);
    assert_eq!((trend[0].year, trend[0].month), (2024, 1));
    assert_eq!(trend[0].total, 200.0);
    assert_eq!(trend[0].count, 2);
    assert_eq!(trend[0].average, 100.0);
    assert_eq!((trend[1].year, trend[1].month), (2024, 2));
    assert_eq!(trend[1].total, 20.0);
    assert_eq!(trend[1].count, 1);
    assert_eq!(trend[1].average, 20.0);

    let shares = analyzer.category_percentages().unwrap().unwrap();
    assert_eq!(shares[0].category, "Food");
    assert_eq!(shares[0].percentage, 90.91);
    assert_eq!(shares[1].category, "Transport");
    assert_eq!(shares[1].percentage, 9.09);

    let top = analyzer.top_expenses(1).unwrap().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].amount, 150.0);
    assert_eq!(top[0].date, "2024-01-05");
}

#[test]
fn test_category_sums_reconcile_with_total() {
    let db = seeded_db();
    let analyzer = Analyzer::new(&db);

    let total = analyzer.spending_summary().unwrap().unwrap().total;
    let categories = analyzer.spending_by_category().unwrap().unwrap();
    let category_sum: f64 = categories.iter().map(|c| c.total).sum();

    // Rounding happens once per category at the final step
    assert!((category_sum - total).abs() <= 0.01 * categories.len() as f64);
}

#[test]
fn test_trend_buckets_partition_the_ledger() {
    let db = seeded_db();
    let analyzer = Analyzer::new(&db);

    let summary = analyzer.spending_summary().unwrap().unwrap();
    let trend = analyzer.monthly_trend().unwrap().unwrap();

    let bucket_count: i64 = trend.iter().map(|b| b.count).sum();
    let bucket_sum: f64 = trend.iter().map(|b| b.total).sum();
    assert_eq!(bucket_count, summary.count);
    assert!((bucket_sum - summary.total).abs() <= 0.01 * trend.len() as f64);
}

#[test]
fn test_delete_missing_id_leaves_analysis_unchanged() {
    let db = seeded_db();
    let analyzer = Analyzer::new(&db);

    let before = analyzer.spending_summary().unwrap().unwrap();
    assert!(!db.delete_expense(9999).unwrap());
    let after = analyzer.spending_summary().unwrap().unwrap();

    assert_eq!(before.count, after.count);
    assert_eq!(before.total, after.total);
}

#[test]
fn test_analysis_reflects_mutations_between_calls() {
    let db = seeded_db();
    let analyzer = Analyzer::new(&db);

    assert_eq!(analyzer.spending_summary().unwrap().unwrap().count, 3);

    let id = db
        .insert_expense(&expense("2024-03-01", 75.0, "Healthcare", "Debit Card"))
        .unwrap();
    assert_eq!(analyzer.spending_summary().unwrap().unwrap().count, 4);

    assert!(db.delete_expense(id).unwrap());
    assert_eq!(analyzer.spending_summary().unwrap().unwrap().count, 3);
}

#[test]
fn test_patterns_for_reference_scenario() {
    let db = seeded_db();
    let patterns = Analyzer::new(&db).find_patterns().unwrap();

    assert_eq!(patterns.len(), 5);
    assert_eq!(patterns[0], "Most frequent expense category: Food");
    assert_eq!(patterns[1], "Highest spending category: Food ($200.00)");
    assert_eq!(patterns[2], "Most used payment method: Cash");
    assert_eq!(patterns[4], "Large purchases (>2x average): 1");
}
