//! # Storage Traits
//!
//! This module defines the storage abstraction the engine talks to instead
//! of owning persistence itself. A [`RecordSource`] implementation can be
//! backed by anything (a cloud document store, SQL, flat files) without the
//! domain layer changing.
//!
//! Every call takes an explicit [`ScopeToken`]: the opaque per-user scope
//! the embedding application obtained at sign-in. The engine passes it
//! through verbatim and never validates it; session validity is the
//! caller's concern, and no ambient current-user state is read anywhere.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::models::{Category, Entry, Period};

/// Opaque per-user scope passed through to every source call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeToken(String);

impl ScopeToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An entry awaiting id assignment by the source.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub description: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

/// Field-level update for a stored entry. `None` fields keep their stored
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
}

/// Trait defining the interface for entry storage operations.
///
/// Any method may fail with a transport or backend error; the ledger
/// surfaces those unchanged as source failures. A `query` implementation
/// may pre-filter server-side, but is not required to be precise about the
/// bounds; the ledger re-verifies the period on every load.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// List the entries of one category, bounded by `period`.
    async fn query(
        &self,
        scope: &ScopeToken,
        category: Category,
        period: &Period,
    ) -> Result<Vec<Entry>>;

    /// Persist a new entry and return it with its assigned id.
    async fn create(
        &self,
        scope: &ScopeToken,
        category: Category,
        draft: EntryDraft,
    ) -> Result<Entry>;

    /// Apply `patch` to the stored entry with the given id.
    async fn update(
        &self,
        scope: &ScopeToken,
        category: Category,
        id: &str,
        patch: EntryPatch,
    ) -> Result<()>;

    /// Delete the stored entry with the given id.
    async fn delete(&self, scope: &ScopeToken, category: Category, id: &str) -> Result<()>;
}
