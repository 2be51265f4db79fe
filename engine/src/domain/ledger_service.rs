//! Category ledger service: one category's entries, active period, and
//! cached aggregate.
//!
//! The ledger mediates all CRUD for its category and keeps the cached
//! [`AggregateResult`] consistent with the stored entries and the active
//! period: after any successful mutation the cache reflects the new state,
//! and a failed operation leaves it at its last-known-good value.
//!
//! Callers are expected to serialize boundary actions per category (e.g.
//! buttons disabled while a load is in flight); the ledger does not lock
//! across operations. It does, however, tag every load with a monotonic
//! sequence number so that a superseded response can never overwrite newer
//! data: rapid period changes are resolved deterministically instead of
//! by network timing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::domain::aggregation::{aggregate, AggregateResult};
use crate::domain::commands::{EntryUpdateCommand, NewEntryCommand};
use crate::domain::errors::{LedgerError, ValidationError};
use crate::domain::models::{Category, Entry, Period};
use crate::storage::traits::{EntryDraft, EntryPatch, RecordSource, ScopeToken};

/// Lifecycle of a category ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerPhase {
    /// No load has completed yet.
    Idle,
    /// A load or mutation round trip is in flight.
    Loading,
    /// The cached aggregate reflects the stored entries and period.
    Ready,
    /// The last load failed; the cache holds the last-known-good result.
    /// Recoverable by retrying [`CategoryLedger::load`].
    Error,
}

struct LedgerState {
    period: Period,
    phase: LedgerPhase,
    cached: Option<AggregateResult>,
}

/// Owns one category's view of the record source: active period, cached
/// aggregate, and all mutations. Categories are independent; the expense
/// and revenue ledgers of one user share the source but nothing else.
pub struct CategoryLedger<S> {
    source: Arc<S>,
    scope: ScopeToken,
    category: Category,
    /// Highest sequence number handed to a load so far.
    load_seq: AtomicU64,
    state: Mutex<LedgerState>,
}

impl<S: RecordSource> CategoryLedger<S> {
    pub fn new(source: Arc<S>, scope: ScopeToken, category: Category, period: Period) -> Self {
        Self {
            source,
            scope,
            category,
            load_seq: AtomicU64::new(0),
            state: Mutex::new(LedgerState {
                period,
                phase: LedgerPhase::Idle,
                cached: None,
            }),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The active period.
    pub fn period(&self) -> Period {
        self.state.lock().unwrap().period
    }

    /// Replaces the active period. Stored entries are untouched; the cache
    /// is refreshed on the next [`load`](Self::load).
    pub fn set_period(&self, period: Period) {
        self.state.lock().unwrap().period = period;
    }

    pub fn phase(&self) -> LedgerPhase {
        self.state.lock().unwrap().phase
    }

    /// Last applied aggregate, if any load has completed.
    pub fn cached(&self) -> Option<AggregateResult> {
        self.state.lock().unwrap().cached.clone()
    }

    /// Fetches the category's entries for the active period, re-verifies
    /// the bound locally (sources are not guaranteed to pre-filter
    /// precisely), aggregates, and caches the result.
    ///
    /// If a newer load starts before this one resolves, the stale result
    /// is discarded silently and the state the ledger kept is returned
    /// instead. A failed load keeps the last-known-good cache and moves
    /// the ledger to [`LedgerPhase::Error`].
    pub async fn load(&self) -> Result<AggregateResult, LedgerError> {
        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let period = {
            let mut state = self.state.lock().unwrap();
            state.phase = LedgerPhase::Loading;
            state.period
        };
        debug!(
            "loading {} for scope '{}' (seq {})",
            self.category.collection_name(),
            self.scope.as_str(),
            seq
        );

        let fetched = self.source.query(&self.scope, self.category, &period).await;

        let mut state = self.state.lock().unwrap();
        let newest = self.load_seq.load(Ordering::SeqCst);
        let entries = match fetched {
            Ok(entries) => entries,
            Err(err) => {
                if seq == newest {
                    warn!(
                        "load of {} failed, keeping last-known-good aggregate: {:#}",
                        self.category.collection_name(),
                        err
                    );
                    state.phase = LedgerPhase::Error;
                }
                return Err(LedgerError::Source(err));
            }
        };
        let result = aggregate(period.filter(entries));
        if seq != newest {
            debug!(
                "discarding stale {} load (seq {}, newest {})",
                self.category.collection_name(),
                seq,
                newest
            );
            return Ok(state.cached.clone().unwrap_or(result));
        }
        state.cached = Some(result.clone());
        state.phase = LedgerPhase::Ready;
        Ok(result)
    }

    /// Validates and persists a new entry dated now, then reloads so the
    /// cached aggregate reflects it. Returns the entry with the id the
    /// source assigned.
    pub async fn add(&self, command: NewEntryCommand) -> Result<Entry, LedgerError> {
        let description = command.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        if command.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount.into());
        }

        let draft = EntryDraft {
            description: description.to_string(),
            amount: command.amount,
            date: Utc::now(),
        };
        let entry = self
            .source
            .create(&self.scope, self.category, draft)
            .await
            .map_err(LedgerError::Source)?;
        info!(
            "added {} entry '{}'",
            self.category.collection_name(),
            entry.id
        );
        self.load().await?;
        Ok(entry)
    }

    /// Updates description and/or amount of an entry in the currently
    /// loaded set, then reloads. Unknown ids are rejected without touching
    /// stored state.
    pub async fn edit(&self, id: &str, command: EntryUpdateCommand) -> Result<(), LedgerError> {
        Self::validate_update(&command)?;
        if !self.is_loaded(id) {
            return Err(LedgerError::NotFound { id: id.to_string() });
        }

        let patch = EntryPatch {
            description: command.description.map(|d| d.trim().to_string()),
            amount: command.amount,
        };
        self.source
            .update(&self.scope, self.category, id, patch)
            .await
            .map_err(LedgerError::Source)?;
        info!("updated {} entry '{}'", self.category.collection_name(), id);
        self.load().await?;
        Ok(())
    }

    /// Deletes an entry from the currently loaded set, then reloads.
    /// Callers obtain explicit user confirmation before invoking this; the
    /// ledger does not.
    pub async fn remove(&self, id: &str) -> Result<(), LedgerError> {
        if !self.is_loaded(id) {
            return Err(LedgerError::NotFound { id: id.to_string() });
        }

        self.source
            .delete(&self.scope, self.category, id)
            .await
            .map_err(LedgerError::Source)?;
        info!("removed {} entry '{}'", self.category.collection_name(), id);
        self.load().await?;
        Ok(())
    }

    fn validate_update(command: &EntryUpdateCommand) -> Result<(), ValidationError> {
        if let Some(description) = &command.description {
            if description.trim().is_empty() {
                return Err(ValidationError::EmptyDescription);
            }
        }
        if let Some(amount) = command.amount {
            if amount <= Decimal::ZERO {
                return Err(ValidationError::NonPositiveAmount);
            }
        }
        Ok(())
    }

    fn is_loaded(&self, id: &str) -> bool {
        let state = self.state.lock().unwrap();
        state
            .cached
            .as_ref()
            .map(|cached| cached.items.iter().any(|item| item.entry.id == id))
            .unwrap_or(false)
    }
}
