//! Ledger aggregation and reporting engine for a personal-finance client.
//!
//! Users record expense and revenue entries; this crate owns the logic the
//! app's screens share: period-bounded aggregation with share-of-total
//! percentages, per-category ledgers with CRUD against an external record
//! source, and cross-category report composition (balance, alert state,
//! monthly chart series).
//!
//! Rendering, navigation, authentication, and persistence all live
//! outside. Storage is reached only through the [`RecordSource`] trait,
//! with an explicit [`ScopeToken`] on every call; the engine never reads
//! ambient session state.

pub mod domain;
pub mod storage;

pub use domain::aggregation::{aggregate, percentage_of, AggregateResult, EntryShare};
pub use domain::commands::{EntryUpdateCommand, NewEntryCommand};
pub use domain::errors::{LedgerError, PeriodError, ValidationError};
pub use domain::ledger_service::{CategoryLedger, LedgerPhase};
pub use domain::models::{Category, Entry, Period, PeriodSpec};
pub use domain::report_service::{
    entry_list_dto, expense_chart_dto, month_labels, monthly_expense_series, summary_dto, Report,
};
pub use storage::memory::MemorySource;
pub use storage::traits::{EntryDraft, EntryPatch, RecordSource, ScopeToken};
