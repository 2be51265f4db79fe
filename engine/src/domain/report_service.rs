//! Cross-category report composition and the chart series.
//!
//! This is the single home of the balance/alert rule and of the
//! month-bucket arithmetic; screens consume the DTO mappers at the bottom
//! instead of re-deriving figures. Everything here is pure: the reference
//! instant is always passed in, never read from the wall clock.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use shared::{AlertState, EntryListItem, ExpenseChart, FinanceSummary};

use crate::domain::aggregation::AggregateResult;
use crate::domain::models::Entry;

/// Number of chart buckets: two calendar months back through the current one.
const CHART_MONTHS: usize = 3;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Cross-category figures for the active periods.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub balance: Decimal,
    pub alert: AlertState,
}

impl Report {
    /// `balance = revenue - expense`; the alert fires iff the balance is
    /// negative. This is the only rule distinguishing the warning state
    /// from the normal one.
    pub fn compose(expense: &AggregateResult, revenue: &AggregateResult) -> Report {
        let balance = revenue.total - expense.total;
        let alert = if balance < Decimal::ZERO {
            AlertState::Negative
        } else {
            AlertState::Ok
        };
        Report { balance, alert }
    }
}

fn month_index(year: i32, month0: u32) -> i64 {
    year as i64 * 12 + month0 as i64
}

/// Buckets expense amounts into `[oldest, middle, newest]` calendar-month
/// slots relative to `now`. Entries dated outside the three-month window
/// are excluded; the distance is year-aware, so an entry from the same
/// month a year earlier never aliases into a bucket.
///
/// Used only for chart rendering, not for the running balance.
pub fn monthly_expense_series(entries: &[Entry], now: DateTime<Utc>) -> [Decimal; CHART_MONTHS] {
    let newest = month_index(now.year(), now.month0());
    let mut series = [Decimal::ZERO; CHART_MONTHS];
    for entry in entries {
        let diff = newest - month_index(entry.date.year(), entry.date.month0());
        if (0..CHART_MONTHS as i64).contains(&diff) {
            series[CHART_MONTHS - 1 - diff as usize] += entry.amount;
        }
    }
    series
}

/// English month names for the three buckets, oldest first. The screens
/// may re-localize; the engine only fixes which months the slots mean.
pub fn month_labels(now: DateTime<Utc>) -> [String; CHART_MONTHS] {
    let current = now.month0() as usize;
    std::array::from_fn(|slot| {
        let back = CHART_MONTHS - 1 - slot;
        MONTH_NAMES[(current + 12 - back) % 12].to_string()
    })
}

/// Home summary DTO from the two category aggregates.
pub fn summary_dto(expense: &AggregateResult, revenue: &AggregateResult) -> FinanceSummary {
    let report = Report::compose(expense, revenue);
    FinanceSummary {
        expense_total: expense.total_rounded(),
        revenue_total: revenue.total_rounded(),
        balance: report.balance.round_dp(2),
        alert: report.alert,
    }
}

/// Chart DTO: month labels plus bucket totals rounded for display.
pub fn expense_chart_dto(entries: &[Entry], now: DateTime<Utc>) -> ExpenseChart {
    ExpenseChart {
        labels: month_labels(now).into(),
        values: monthly_expense_series(entries, now)
            .into_iter()
            .map(|value| value.round_dp(2))
            .collect(),
    }
}

/// List-screen rows for one category aggregate, in aggregate order.
pub fn entry_list_dto(result: &AggregateResult) -> Vec<EntryListItem> {
    result
        .items
        .iter()
        .map(|item| EntryListItem {
            id: item.entry.id.clone(),
            description: item.entry.description.clone(),
            amount: item.entry.amount.round_dp(2),
            percentage: item.percentage,
            date: item.entry.date,
        })
        .collect()
}
