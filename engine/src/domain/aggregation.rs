//! Pure reduction of a filtered entry set into a total and per-entry shares.
//!
//! All percentage math in the engine funnels through [`percentage_of`], so
//! the zero-division guard and the two-decimal rounding rule are applied
//! identically everywhere a share of a total is shown.

use rust_decimal::Decimal;

use crate::domain::models::Entry;

/// An entry annotated with its share of the aggregate total.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryShare {
    pub entry: Entry,
    /// `amount / total * 100` rounded to two decimals; zero when the total
    /// is zero.
    pub percentage: Decimal,
}

/// Total and per-entry shares for one category and period.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    /// Full-precision sum of the entry amounts.
    pub total: Decimal,
    /// Entries in input order; no implicit reordering.
    pub items: Vec<EntryShare>,
}

impl AggregateResult {
    /// Two-decimal presentation value of the total.
    pub fn total_rounded(&self) -> Decimal {
        self.total.round_dp(2)
    }
}

/// Share of `total` represented by `amount`, as a percentage rounded to
/// two decimals. Zero when `total` is zero.
pub fn percentage_of(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (amount * Decimal::ONE_HUNDRED / total).round_dp(2)
}

/// Reduces an already period-filtered entry set into an [`AggregateResult`].
pub fn aggregate(entries: Vec<Entry>) -> AggregateResult {
    let total: Decimal = entries.iter().map(|entry| entry.amount).sum();
    let items = entries
        .into_iter()
        .map(|entry| EntryShare {
            percentage: percentage_of(entry.amount, total),
            entry,
        })
        .collect();
    AggregateResult { total, items }
}
