//! Time windows used to bound ledger queries and aggregation.
//!
//! A [`Period`] is a validated pair of inclusive bounds; a [`PeriodSpec`]
//! is how callers name a window before it is resolved. Relative specs are
//! anchored to a `now` supplied per call, never cached, so two consecutive
//! resolutions can legitimately differ.

use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Utc};

use crate::domain::errors::PeriodError;
use crate::domain::models::Entry;

/// An inclusive date-time window.
///
/// Both bounds are part of the window. A zero-length period
/// (`start == end`) is legal and matches same-instant entries only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Period {
    /// Builds a window, rejecting inverted bounds.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvertedBounds);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `date` falls inside the window, bounds included.
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }

    /// Keeps the entries dated inside the window, preserving input order.
    pub fn filter(&self, entries: Vec<Entry>) -> Vec<Entry> {
        entries
            .into_iter()
            .filter(|entry| self.contains(entry.date))
            .collect()
    }

    /// Default dashboard window: first instant of the previous calendar
    /// month through the last instant of the current calendar month.
    pub fn dashboard_default(now: DateTime<Utc>) -> Result<Self, PeriodError> {
        let first_of_current = Utc
            .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
            .single()
            .ok_or(PeriodError::UnrepresentableDate)?;
        let start = first_of_current
            .checked_sub_months(Months::new(1))
            .ok_or(PeriodError::UnrepresentableDate)?;
        let first_of_next = first_of_current
            .checked_add_months(Months::new(1))
            .ok_or(PeriodError::UnrepresentableDate)?;
        Self::new(start, first_of_next - Duration::nanoseconds(1))
    }
}

/// How a caller names a window before it is resolved to concrete bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSpec {
    /// Explicit inclusive bounds.
    Explicit {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// The `n` calendar months ending at the anchor: the window starts
    /// `n - 1` months before it (same day and time, day clamped) and ends
    /// at the anchor itself.
    LastMonths(u32),
}

impl PeriodSpec {
    /// Resolves the spec anchored to the current instant. Relative specs
    /// are re-resolved on every call; nothing is cached.
    pub fn resolve(&self) -> Result<Period, PeriodError> {
        self.resolve_at(Utc::now())
    }

    /// Resolves the spec against the supplied anchor.
    pub fn resolve_at(&self, now: DateTime<Utc>) -> Result<Period, PeriodError> {
        match *self {
            PeriodSpec::Explicit { start, end } => Period::new(start, end),
            PeriodSpec::LastMonths(months) => {
                let back = months.saturating_sub(1);
                let start = now
                    .checked_sub_months(Months::new(back))
                    .ok_or(PeriodError::UnrepresentableDate)?;
                Period::new(start, now)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Category;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s)
            .single()
            .expect("valid test date")
    }

    fn entry(id: &str, day: DateTime<Utc>) -> Entry {
        Entry {
            id: id.to_string(),
            description: format!("entry {}", id),
            amount: Decimal::new(1000, 2),
            date: day,
            category: Category::Expense,
        }
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        let err = Period::new(date(2024, 3, 10, 0, 0, 0), date(2024, 3, 9, 0, 0, 0))
            .expect_err("inverted bounds must be rejected");
        assert_eq!(err, PeriodError::InvertedBounds);
    }

    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let period = Period::new(date(2024, 3, 1, 0, 0, 0), date(2024, 3, 31, 23, 59, 59))
            .expect("valid window");
        assert!(period.contains(period.start()));
        assert!(period.contains(period.end()));
        assert!(!period.contains(date(2024, 4, 1, 0, 0, 0)));
        assert!(!period.contains(date(2024, 2, 29, 23, 59, 59)));
    }

    #[test]
    fn zero_length_period_matches_same_instant_only() {
        let instant = date(2024, 3, 5, 12, 0, 0);
        let period = Period::new(instant, instant).expect("zero-length window is legal");
        assert!(period.contains(instant));
        assert!(!period.contains(instant + Duration::seconds(1)));
        assert!(!period.contains(instant - Duration::seconds(1)));
    }

    #[test]
    fn filter_keeps_in_window_entries_in_order() {
        let period = Period::new(date(2024, 3, 1, 0, 0, 0), date(2024, 3, 31, 23, 59, 59))
            .expect("valid window");
        let entries = vec![
            entry("a", date(2024, 3, 5, 9, 0, 0)),
            entry("b", date(2024, 2, 5, 9, 0, 0)),
            entry("c", date(2024, 3, 10, 9, 0, 0)),
            entry("d", date(2024, 4, 2, 9, 0, 0)),
        ];
        let kept = period.filter(entries);
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn dashboard_default_spans_previous_and_current_month() {
        let period =
            Period::dashboard_default(date(2024, 3, 15, 10, 30, 0)).expect("valid default window");
        assert_eq!(period.start(), date(2024, 2, 1, 0, 0, 0));
        assert!(period.contains(date(2024, 3, 31, 23, 59, 59)));
        assert!(!period.contains(date(2024, 4, 1, 0, 0, 0)));
        assert!(!period.contains(date(2024, 1, 31, 23, 59, 59)));
    }

    #[test]
    fn last_months_anchors_at_now() {
        let now = date(2024, 3, 15, 12, 0, 0);
        let period = PeriodSpec::LastMonths(3)
            .resolve_at(now)
            .expect("resolvable window");
        assert_eq!(period.start(), date(2024, 1, 15, 12, 0, 0));
        assert_eq!(period.end(), now);
    }

    #[test]
    fn last_months_clamps_short_months() {
        let now = date(2024, 3, 31, 8, 0, 0);
        let period = PeriodSpec::LastMonths(2)
            .resolve_at(now)
            .expect("resolvable window");
        assert_eq!(period.start(), date(2024, 2, 29, 8, 0, 0));
    }

    #[test]
    fn explicit_spec_resolves_verbatim() {
        let start = date(2024, 3, 1, 0, 0, 0);
        let end = date(2024, 3, 31, 23, 59, 59);
        let period = PeriodSpec::Explicit { start, end }
            .resolve_at(date(2025, 1, 1, 0, 0, 0))
            .expect("valid window");
        assert_eq!(period.start(), start);
        assert_eq!(period.end(), end);
    }
}
