//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use tally_core::{Database, NewExpense};

use crate::commands::{self, truncate};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn insert_expense(db: &Database, date: &str, amount: f64, category: &str, payment: &str) -> i64 {
    db.insert_expense(&NewExpense {
        date: date.to_string(),
        amount,
        category: category.to_string(),
        description: String::new(),
        payment_method: payment.to_string(),
    })
    .unwrap()
}

// ========== Add Command Tests ==========

#[test]
fn test_cmd_add_valid() {
    let db = setup_test_db();
    let result = commands::cmd_add(&db, 12.5, "food", "cash", Some("2024-01-01"), "lunch");
    assert!(result.is_ok());

    let expenses = db.list_expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    // Aliases resolve to the canonical option-set strings
    assert_eq!(expenses[0].category, "Food & Dining");
    assert_eq!(expenses[0].payment_method, "Cash");
    assert_eq!(expenses[0].description, "lunch");
}

#[test]
fn test_cmd_add_defaults_to_today() {
    let db = setup_test_db();

    // Bracket the call so the assertion holds even if the test straddles
    // a UTC midnight boundary
    let before = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    commands::cmd_add(&db, 5.0, "other", "cash", None, "").unwrap();
    let after = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();

    let stored = db.list_expenses().unwrap()[0].date.clone();
    assert!(
        stored == before || stored == after,
        "stored date {} is neither {} nor {}",
        stored,
        before,
        after
    );
}

#[test]
fn test_cmd_add_rejects_unknown_category() {
    let db = setup_test_db();
    let result = commands::cmd_add(&db, 5.0, "gambling", "cash", Some("2024-01-01"), "");
    assert!(result.is_err());
    assert_eq!(db.count_expenses().unwrap(), 0);
}

#[test]
fn test_cmd_add_rejects_unknown_payment_method() {
    let db = setup_test_db();
    let result = commands::cmd_add(&db, 5.0, "food", "iou", Some("2024-01-01"), "");
    assert!(result.is_err());
}

#[test]
fn test_cmd_add_rejects_nonpositive_amount() {
    let db = setup_test_db();
    assert!(commands::cmd_add(&db, 0.0, "food", "cash", Some("2024-01-01"), "").is_err());
    assert!(commands::cmd_add(&db, -3.0, "food", "cash", Some("2024-01-01"), "").is_err());
    assert_eq!(db.count_expenses().unwrap(), 0);
}

#[test]
fn test_cmd_add_rejects_invalid_date() {
    let db = setup_test_db();
    let result = commands::cmd_add(&db, 5.0, "food", "cash", Some("2024-02-30"), "");
    assert!(result.is_err());
}

// ========== List Command Tests ==========

#[test]
fn test_cmd_list_all() {
    let db = setup_test_db();
    insert_expense(&db, "2024-01-01", 10.0, "Food & Dining", "Cash");
    insert_expense(&db, "2024-01-02", 20.0, "Shopping", "Credit Card");

    assert!(commands::cmd_list(&db, None, None, None, None).is_ok());
    assert!(commands::cmd_list(&db, None, None, None, Some(1)).is_ok());
}

#[test]
fn test_cmd_list_filters() {
    let db = setup_test_db();
    insert_expense(&db, "2024-01-01", 10.0, "Food & Dining", "Cash");

    assert!(commands::cmd_list(&db, Some("Food & Dining"), None, None, None).is_ok());
    assert!(commands::cmd_list(&db, None, Some("2024-01-01"), Some("2024-01-31"), None).is_ok());
}

#[test]
fn test_cmd_list_rejects_conflicting_filters() {
    let db = setup_test_db();
    assert!(commands::cmd_list(&db, Some("Food"), Some("2024-01-01"), Some("2024-01-31"), None)
        .is_err());
    // --from without --to
    assert!(commands::cmd_list(&db, None, Some("2024-01-01"), None, None).is_err());
}

#[test]
fn test_cmd_list_rejects_bad_range_dates() {
    let db = setup_test_db();
    assert!(commands::cmd_list(&db, None, Some("notadate"), Some("2024-01-31"), None).is_err());
}

// ========== Delete Command Tests ==========

#[test]
fn test_cmd_delete_existing_and_missing() {
    let db = setup_test_db();
    let id = insert_expense(&db, "2024-01-01", 10.0, "Food & Dining", "Cash");

    // Missing id succeeds as a command (reported, not fatal) and leaves
    // the store untouched
    assert!(commands::cmd_delete(&db, id + 50).is_ok());
    assert_eq!(db.count_expenses().unwrap(), 1);

    assert!(commands::cmd_delete(&db, id).is_ok());
    assert_eq!(db.count_expenses().unwrap(), 0);
}

// ========== Report Command Tests ==========

#[test]
fn test_report_commands_on_empty_ledger() {
    let db = setup_test_db();

    // Empty data is a friendly message, never an error
    assert!(commands::cmd_report_summary(&db, false).is_ok());
    assert!(commands::cmd_report_categories(&db, false).is_ok());
    assert!(commands::cmd_report_payments(&db, false).is_ok());
    assert!(commands::cmd_report_monthly(&db, false).is_ok());
    assert!(commands::cmd_report_top(&db, 5, false).is_ok());
    assert!(commands::cmd_report_percentages(&db, false).is_ok());
    assert!(commands::cmd_report_patterns(&db, false).is_ok());
    assert!(commands::cmd_dashboard(&db).is_ok());
}

#[test]
fn test_report_commands_with_data() {
    let db = setup_test_db();
    insert_expense(&db, "2024-01-01", 50.0, "Food & Dining", "Cash");
    insert_expense(&db, "2024-01-05", 150.0, "Food & Dining", "Credit Card");
    insert_expense(&db, "2024-02-01", 20.0, "Transportation", "Cash");

    assert!(commands::cmd_report_summary(&db, false).is_ok());
    assert!(commands::cmd_report_categories(&db, true).is_ok());
    assert!(commands::cmd_report_monthly(&db, true).is_ok());
    assert!(commands::cmd_report_top(&db, 2, false).is_ok());
    assert!(commands::cmd_report_patterns(&db, true).is_ok());
    assert!(commands::cmd_dashboard(&db).is_ok());
}

#[test]
fn test_report_top_rejects_zero_limit() {
    let db = setup_test_db();
    insert_expense(&db, "2024-01-01", 10.0, "Other", "Cash");

    assert!(commands::cmd_report_top(&db, 0, false).is_err());
}

// ========== Export Command Tests ==========

#[test]
fn test_cmd_export_to_file() {
    let db = setup_test_db();
    insert_expense(&db, "2024-01-01", 10.0, "Food & Dining", "Cash");

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("ledger.csv");
    assert!(commands::cmd_export(&db, "csv", Some(&csv_path)).is_ok());
    let csv_text = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv_text.contains("Food & Dining"));

    let json_path = dir.path().join("ledger.json");
    assert!(commands::cmd_export(&db, "json", Some(&json_path)).is_ok());
    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 1);
}

#[test]
fn test_cmd_export_rejects_unknown_format() {
    let db = setup_test_db();
    assert!(commands::cmd_export(&db, "xml", None).is_err());
}

// ========== Helpers ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly ten", 11), "exactly ten");
    assert_eq!(truncate("much longer than allowed", 10), "much lo...");
}

#[test]
fn test_truncate_cuts_multibyte_text_at_char_boundaries() {
    // Descriptions are free text; a cut landing inside a multi-byte
    // character must not panic
    assert_eq!(truncate("abcdefé plus more text", 10), "abcdefé...");
    assert_eq!(truncate("café au lait", 6), "caf...");
    assert_eq!(truncate("crème brûlée", 12), "crème brûlée");
    assert_eq!(truncate("日本語のテキストです", 5), "日本...");
}

#[test]
fn test_list_and_reports_accept_multibyte_text() {
    let db = setup_test_db();
    db.insert_expense(&NewExpense {
        date: "2024-01-01".to_string(),
        amount: 4.5,
        category: "Food & Dining".to_string(),
        description: "café au lait — crème brûlée and a very long note indeed".to_string(),
        payment_method: "Cash".to_string(),
    })
    .unwrap();

    assert!(commands::cmd_list(&db, None, None, None, None).is_ok());
    assert!(commands::cmd_report_top(&db, 5, false).is_ok());
    assert!(commands::cmd_dashboard(&db).is_ok());
}
