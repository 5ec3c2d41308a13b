//! Expense analysis: summaries, groupings, rankings, and pattern insights
//!
//! Every operation re-reads a full ledger snapshot and computes from it;
//! nothing is cached between calls. An empty ledger is a defined "no data"
//! result (`None`, or an empty list for [`Analyzer::find_patterns`]), never
//! an error.
//!
//! Rounding convention: aggregates exposed to callers are rounded to two
//! decimals using round-half-away-from-zero (what `f64::round` does).
//! Intermediate values feeding further computation are never rounded, so
//! e.g. percentages divide raw category sums by the raw grand total and
//! round only at the end.

use std::collections::HashMap;

use tracing::debug;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{
    CategoryShare, CategorySpending, Expense, MonthlySpending, PaymentMethodSpending,
    SpendingSummary, TopExpense,
};

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A running accumulator for one grouping key
struct Group {
    key: String,
    sum: f64,
    count: i64,
}

/// Accumulate amounts under a string key, preserving the order in which
/// keys are first encountered in the snapshot. That first-encounter order
/// is what breaks ties when groups are later sorted by sum.
fn group_amounts<F>(expenses: &[Expense], key_of: F) -> Vec<Group>
where
    F: Fn(&Expense) -> &str,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for expense in expenses {
        let key = key_of(expense);
        let slot = *index.entry(key.to_string()).or_insert_with(|| {
            groups.push(Group {
                key: key.to_string(),
                sum: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[slot].sum += expense.amount;
        groups[slot].count += 1;
    }

    groups
}

/// Analyzes ledger snapshots for spending insights
///
/// Stateless aside from the store handle: every call is a pure
/// snapshot-then-compute read with no side effects.
pub struct Analyzer<'a> {
    db: &'a Database,
}

impl<'a> Analyzer<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn snapshot(&self) -> Result<Vec<Expense>> {
        self.db.list_expenses()
    }

    /// Overall spending summary: count, total, average, largest, smallest
    ///
    /// Returns `None` for an empty ledger; "no data" is distinct from
    /// "data summing to zero" and the caller branches on it.
    pub fn spending_summary(&self) -> Result<Option<SpendingSummary>> {
        let expenses = self.snapshot()?;
        if expenses.is_empty() {
            return Ok(None);
        }

        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        let largest = expenses.iter().map(|e| e.amount).fold(f64::MIN, f64::max);
        let smallest = expenses.iter().map(|e| e.amount).fold(f64::MAX, f64::min);

        Ok(Some(SpendingSummary {
            count: expenses.len() as i64,
            total,
            average: total / expenses.len() as f64,
            largest,
            smallest,
        }))
    }

    /// Spending grouped by exact category string, ordered by total descending
    ///
    /// Ties in total keep the first-encountered category first. That order
    /// is deterministic for a fixed snapshot but otherwise carries no
    /// meaning.
    pub fn spending_by_category(&self) -> Result<Option<Vec<CategorySpending>>> {
        let expenses = self.snapshot()?;
        if expenses.is_empty() {
            return Ok(None);
        }

        let mut groups = group_amounts(&expenses, |e| &e.category);
        // Stable sort: equal sums keep first-encounter order
        groups.sort_by(|a, b| b.sum.total_cmp(&a.sum));

        Ok(Some(
            groups
                .into_iter()
                .map(|g| CategorySpending {
                    category: g.key,
                    total: round2(g.sum),
                    count: g.count,
                    average: round2(g.sum / g.count as f64),
                })
                .collect(),
        ))
    }

    /// Spending grouped by payment method, ordered by total descending
    pub fn spending_by_payment_method(&self) -> Result<Option<Vec<PaymentMethodSpending>>> {
        let expenses = self.snapshot()?;
        if expenses.is_empty() {
            return Ok(None);
        }

        let mut groups = group_amounts(&expenses, |e| &e.payment_method);
        groups.sort_by(|a, b| b.sum.total_cmp(&a.sum));

        Ok(Some(
            groups
                .into_iter()
                .map(|g| PaymentMethodSpending {
                    method: g.key,
                    total: round2(g.sum),
                    count: g.count,
                })
                .collect(),
        ))
    }

    /// Spending bucketed by calendar month, chronologically ascending
    ///
    /// Fails with [`Error::MalformedDate`] if any record's date does not
    /// parse; a bad stored date is a data-integrity fault, not something
    /// to skip silently. A snapshot spanning a single month still yields
    /// one bucket.
    pub fn monthly_trend(&self) -> Result<Option<Vec<MonthlySpending>>> {
        use chrono::Datelike;

        let expenses = self.snapshot()?;
        if expenses.is_empty() {
            return Ok(None);
        }

        let mut index: HashMap<(i32, u32), usize> = HashMap::new();
        let mut buckets: Vec<MonthlySpending> = Vec::new();

        for expense in &expenses {
            let date = expense.parsed_date()?;
            let key = (date.year(), date.month());
            let slot = *index.entry(key).or_insert_with(|| {
                buckets.push(MonthlySpending {
                    year: key.0,
                    month: key.1,
                    total: 0.0,
                    count: 0,
                    average: 0.0,
                });
                buckets.len() - 1
            });
            buckets[slot].total += expense.amount;
            buckets[slot].count += 1;
        }

        // (year, month) sorts lexicographically, which is chronological
        buckets.sort_by_key(|b| (b.year, b.month));

        for bucket in &mut buckets {
            bucket.average = round2(bucket.total / bucket.count as f64);
            bucket.total = round2(bucket.total);
        }

        debug!(buckets = buckets.len(), "Computed monthly trend");
        Ok(Some(buckets))
    }

    /// The `n` largest expenses, descending by amount
    ///
    /// Ties keep snapshot order (stable sort). Returns all records when
    /// fewer than `n` exist. `n` must be at least 1.
    pub fn top_expenses(&self, n: usize) -> Result<Option<Vec<TopExpense>>> {
        if n < 1 {
            return Err(Error::InvalidArgument(
                "top expense count must be at least 1".to_string(),
            ));
        }

        let mut expenses = self.snapshot()?;
        if expenses.is_empty() {
            return Ok(None);
        }

        expenses.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        expenses.truncate(n);

        Ok(Some(
            expenses
                .into_iter()
                .map(|e| TopExpense {
                    date: e.date,
                    amount: e.amount,
                    category: e.category,
                    description: e.description,
                })
                .collect(),
        ))
    }

    /// Each category's share of total spending, ordered by raw sum descending
    ///
    /// Percentages divide unrounded category sums by the unrounded grand
    /// total and round last, so they reconcile with the totals they came
    /// from. The grand total cannot be zero for a non-empty snapshot since
    /// amounts are strictly positive.
    pub fn category_percentages(&self) -> Result<Option<Vec<CategoryShare>>> {
        let expenses = self.snapshot()?;
        if expenses.is_empty() {
            return Ok(None);
        }

        let grand_total: f64 = expenses.iter().map(|e| e.amount).sum();

        let mut groups = group_amounts(&expenses, |e| &e.category);
        groups.sort_by(|a, b| b.sum.total_cmp(&a.sum));

        Ok(Some(
            groups
                .into_iter()
                .map(|g| CategoryShare {
                    category: g.key,
                    amount: round2(g.sum),
                    percentage: round2(g.sum / grand_total * 100.0),
                })
                .collect(),
        ))
    }

    /// Derive the fixed, ordered list of spending-pattern findings
    ///
    /// An empty ledger yields an empty list, which is a valid result in
    /// its own right (zero findings, not "no result").
    pub fn find_patterns(&self) -> Result<Vec<String>> {
        let expenses = self.snapshot()?;
        if expenses.is_empty() {
            return Ok(Vec::new());
        }

        let mut patterns = Vec::with_capacity(5);

        let by_category = group_amounts(&expenses, |e| &e.category);
        let by_payment = group_amounts(&expenses, |e| &e.payment_method);

        // 1. Most frequent category. Strict comparison keeps the
        //    first-encountered group on count ties.
        let most_frequent = by_category
            .iter()
            .reduce(|best, g| if g.count > best.count { g } else { best })
            .map(|g| g.key.as_str())
            .unwrap_or_default();
        patterns.push(format!("Most frequent expense category: {}", most_frequent));

        // 2. Highest-spending category and its total
        if let Some(highest) = by_category
            .iter()
            .reduce(|best, g| if g.sum > best.sum { g } else { best })
        {
            patterns.push(format!(
                "Highest spending category: {} (${:.2})",
                highest.key, highest.sum
            ));
        }

        // 3. Most-used payment method, same tie rule as #1
        let preferred = by_payment
            .iter()
            .reduce(|best, g| if g.count > best.count { g } else { best })
            .map(|g| g.key.as_str())
            .unwrap_or_default();
        patterns.push(format!("Most used payment method: {}", preferred));

        // 4. Average daily spending over the inclusive day span.
        //    The +1 makes a single-day ledger divide by 1, not 0.
        let mut min_date = None;
        let mut max_date = None;
        for expense in &expenses {
            let date = expense.parsed_date()?;
            min_date = Some(min_date.map_or(date, |d: chrono::NaiveDate| d.min(date)));
            max_date = Some(max_date.map_or(date, |d: chrono::NaiveDate| d.max(date)));
        }
        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        if let (Some(min), Some(max)) = (min_date, max_date) {
            let span_days = (max - min).num_days() + 1;
            patterns.push(format!(
                "Average daily spending: ${:.2}",
                total / span_days as f64
            ));
        }

        // 5. Large purchases: strictly above twice the mean amount
        let mean = total / expenses.len() as f64;
        let large = expenses.iter().filter(|e| e.amount > mean * 2.0).count();
        patterns.push(format!("Large purchases (>2x average): {}", large));

        Ok(patterns)
    }
}
