//! DTO types exchanged between the reporting engine and the app screens.
//!
//! Everything in this crate is plain serializable data: the engine maps its
//! domain results into these shapes and the screens render them as-is. No
//! business logic lives here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the dashboard should show the negative-balance warning.
///
/// Serialized as `"ok"` / `"negative"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    Ok,
    Negative,
}

/// Cross-category totals for the home summary screen.
///
/// All money fields are rounded to two decimals for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub expense_total: Decimal,
    pub revenue_total: Decimal,
    /// `revenue_total - expense_total` for the active periods.
    pub balance: Decimal,
    pub alert: AlertState,
}

/// Three-month expense series for the bar chart screen.
///
/// `labels[i]` names the calendar month of `values[i]`; index 0 is the
/// oldest bucket and index 2 the current month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseChart {
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
}

/// One row of a category list screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryListItem {
    pub id: String,
    pub description: String,
    /// Amount rounded to two decimals for display.
    pub amount: Decimal,
    /// Share of the category total in the active period, rounded to two
    /// decimals. Zero when the category total is zero.
    pub percentage: Decimal,
    pub date: DateTime<Utc>,
}
