//! Domain models for Tally

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Date format used everywhere a date is stored or parsed
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
///
/// Immutable once inserted: the store assigns `id` and never reuses it,
/// and records are only ever removed whole, never updated in place.
/// `category` and `payment_method` are stored as free text; the entry
/// layer validates them against [`Category`] and [`PaymentMethod`], but
/// the store and analyzer accept any string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    /// ISO-8601 calendar date (`YYYY-MM-DD`), no time component
    pub date: String,
    /// Strictly positive; enforced at entry, not by the store
    pub amount: f64,
    pub category: String,
    /// Optional free text, may be empty
    pub description: String,
    pub payment_method: String,
}

impl Expense {
    /// Parse the stored date text into a calendar date
    ///
    /// Fails with [`Error::MalformedDate`] identifying this record if the
    /// text is not a valid `YYYY-MM-DD` date.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| Error::MalformedDate {
            id: self.id,
            value: self.date.clone(),
        })
    }
}

/// Payload for inserting a new expense (the store assigns the id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub payment_method: String,
}

impl NewExpense {
    /// Entry-time validation: positive amount and a parseable date
    ///
    /// The store itself does not enforce either; this is the gate the
    /// entry surface (CLI, import) runs before inserting.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        if NaiveDate::parse_from_str(&self.date, DATE_FORMAT).is_err() {
            return Err(Error::InvalidArgument(format!(
                "invalid date '{}' (expected YYYY-MM-DD)",
                self.date
            )));
        }
        Ok(())
    }
}

/// Expense categories offered at entry time
///
/// This set validates input only. Stored records keep the category as
/// text, so analysis must handle values outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::FoodAndDining,
        Self::Transportation,
        Self::Shopping,
        Self::Entertainment,
        Self::BillsAndUtilities,
        Self::Healthcare,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food & dining" | "food" | "dining" => Ok(Self::FoodAndDining),
            "transportation" | "transport" => Ok(Self::Transportation),
            "shopping" => Ok(Self::Shopping),
            "entertainment" => Ok(Self::Entertainment),
            "bills & utilities" | "bills" | "utilities" => Ok(Self::BillsAndUtilities),
            "healthcare" | "health" => Ok(Self::Healthcare),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "Unknown category: {} (valid: {})",
                s,
                Category::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment methods offered at entry time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    DigitalWallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        Self::Cash,
        Self::CreditCard,
        Self::DebitCard,
        Self::DigitalWallet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::DigitalWallet => "Digital Wallet",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "credit card" | "credit" => Ok(Self::CreditCard),
            "debit card" | "debit" => Ok(Self::DebitCard),
            "digital wallet" | "wallet" => Ok(Self::DigitalWallet),
            _ => Err(format!(
                "Unknown payment method: {} (valid: Cash, Credit Card, Debit Card, Digital Wallet)",
                s
            )),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ========== Report Models ==========

/// Overall spending summary
///
/// Aggregates are left unrounded; formatting happens at the display
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingSummary {
    pub count: i64,
    pub total: f64,
    pub average: f64,
    pub largest: f64,
    pub smallest: f64,
}

/// Per-category spending aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    /// Rounded to 2 decimals
    pub total: f64,
    pub count: i64,
    /// Rounded to 2 decimals
    pub average: f64,
}

/// Per-payment-method spending aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodSpending {
    pub method: String,
    /// Rounded to 2 decimals
    pub total: f64,
    pub count: i64,
}

/// One calendar-month bucket in the monthly trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySpending {
    pub year: i32,
    pub month: u32,
    /// Rounded to 2 decimals
    pub total: f64,
    pub count: i64,
    /// Rounded to 2 decimals
    pub average: f64,
}

impl MonthlySpending {
    /// Bucket label in `YYYY-MM` form
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Projection of a record in the top-expenses ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopExpense {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

/// A category's share of total spending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    /// Rounded to 2 decimals
    pub amount: f64,
    /// Percentage of the grand total, rounded to 2 decimals
    pub percentage: f64,
}
