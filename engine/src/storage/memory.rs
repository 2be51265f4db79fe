//! In-memory [`RecordSource`] used by tests and demo embeddings.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{Category, Entry, Period};
use crate::storage::traits::{EntryDraft, EntryPatch, RecordSource, ScopeToken};

/// Entry collections keyed by scope and category, in insertion order.
///
/// Ids follow the `entry::<collection>::<uuid>` shape: readable in logs,
/// opaque to the engine. `query` filters by the requested period the way a
/// real backend would, so ledger-side re-verification is exercised against
/// a source that already pre-filters.
#[derive(Debug, Default)]
pub struct MemorySource {
    collections: Mutex<HashMap<(ScopeToken, Category), Vec<Entry>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(category: Category) -> String {
        format!(
            "entry::{}::{}",
            category.collection_name(),
            Uuid::new_v4().simple()
        )
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn query(
        &self,
        scope: &ScopeToken,
        category: Category,
        period: &Period,
    ) -> Result<Vec<Entry>> {
        let collections = self.collections.lock().unwrap();
        let entries = collections
            .get(&(scope.clone(), category))
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| period.contains(entry.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(entries)
    }

    async fn create(
        &self,
        scope: &ScopeToken,
        category: Category,
        draft: EntryDraft,
    ) -> Result<Entry> {
        let entry = Entry {
            id: Self::assign_id(category),
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            category,
        };
        let mut collections = self.collections.lock().unwrap();
        collections
            .entry((scope.clone(), category))
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    async fn update(
        &self,
        scope: &ScopeToken,
        category: Category,
        id: &str,
        patch: EntryPatch,
    ) -> Result<()> {
        let mut collections = self.collections.lock().unwrap();
        let stored = collections
            .get_mut(&(scope.clone(), category))
            .and_then(|entries| entries.iter_mut().find(|entry| entry.id == id));
        match stored {
            Some(entry) => {
                if let Some(description) = patch.description {
                    entry.description = description;
                }
                if let Some(amount) = patch.amount {
                    entry.amount = amount;
                }
                Ok(())
            }
            None => bail!(
                "No entry with id '{}' in {}",
                id,
                category.collection_name()
            ),
        }
    }

    async fn delete(&self, scope: &ScopeToken, category: Category, id: &str) -> Result<()> {
        let mut collections = self.collections.lock().unwrap();
        let entries = match collections.get_mut(&(scope.clone(), category)) {
            Some(entries) => entries,
            None => bail!(
                "No entry with id '{}' in {}",
                id,
                category.collection_name()
            ),
        };
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            bail!(
                "No entry with id '{}' in {}",
                id,
                category.collection_name()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .expect("valid test date")
    }

    fn march() -> Period {
        Period::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59)
                .single()
                .unwrap(),
        )
        .expect("valid window")
    }

    fn draft(description: &str, cents: i64, day: DateTime<Utc>) -> EntryDraft {
        EntryDraft {
            description: description.to_string(),
            amount: Decimal::new(cents, 2),
            date: day,
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids_and_category() {
        let source = MemorySource::new();
        let scope = ScopeToken::new("user-1");

        let first = source
            .create(&scope, Category::Expense, draft("Groceries", 20000, date(2024, 3, 5)))
            .await
            .expect("create first entry");
        let second = source
            .create(&scope, Category::Expense, draft("Fuel", 15000, date(2024, 3, 10)))
            .await
            .expect("create second entry");

        assert_ne!(first.id, second.id, "ids must be unique");
        assert!(first.id.starts_with("entry::expenses::"));
        assert_eq!(first.category, Category::Expense);
    }

    #[tokio::test]
    async fn query_respects_scope_category_and_period() {
        let source = MemorySource::new();
        let scope = ScopeToken::new("user-1");
        let other_scope = ScopeToken::new("user-2");

        source
            .create(&scope, Category::Expense, draft("In window", 100, date(2024, 3, 5)))
            .await
            .expect("create in-window entry");
        source
            .create(&scope, Category::Expense, draft("Too old", 100, date(2024, 1, 5)))
            .await
            .expect("create out-of-window entry");
        source
            .create(&scope, Category::Revenue, draft("Salary", 100, date(2024, 3, 5)))
            .await
            .expect("create revenue entry");

        let expenses = source
            .query(&scope, Category::Expense, &march())
            .await
            .expect("query expenses");
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].description, "In window");

        let foreign = source
            .query(&other_scope, Category::Expense, &march())
            .await
            .expect("query foreign scope");
        assert!(foreign.is_empty(), "scopes must be disjoint");
    }

    #[tokio::test]
    async fn update_patches_only_provided_fields() {
        let source = MemorySource::new();
        let scope = ScopeToken::new("user-1");
        let created = source
            .create(&scope, Category::Expense, draft("Groceries", 20000, date(2024, 3, 5)))
            .await
            .expect("create entry");

        source
            .update(
                &scope,
                Category::Expense,
                &created.id,
                EntryPatch {
                    amount: Some(Decimal::new(21000, 2)),
                    ..EntryPatch::default()
                },
            )
            .await
            .expect("update amount");

        let entries = source
            .query(&scope, Category::Expense, &march())
            .await
            .expect("query after update");
        assert_eq!(entries[0].description, "Groceries");
        assert_eq!(entries[0].amount, Decimal::new(21000, 2));
    }

    #[tokio::test]
    async fn update_and_delete_fail_for_unknown_ids() {
        let source = MemorySource::new();
        let scope = ScopeToken::new("user-1");
        source
            .create(&scope, Category::Expense, draft("Groceries", 20000, date(2024, 3, 5)))
            .await
            .expect("create entry");

        source
            .update(&scope, Category::Expense, "missing", EntryPatch::default())
            .await
            .expect_err("update of unknown id must fail");
        source
            .delete(&scope, Category::Expense, "missing")
            .await
            .expect_err("delete of unknown id must fail");
    }

    #[tokio::test]
    async fn delete_removes_the_entry() {
        let source = MemorySource::new();
        let scope = ScopeToken::new("user-1");
        let created = source
            .create(&scope, Category::Expense, draft("Groceries", 20000, date(2024, 3, 5)))
            .await
            .expect("create entry");

        source
            .delete(&scope, Category::Expense, &created.id)
            .await
            .expect("delete entry");
        let entries = source
            .query(&scope, Category::Expense, &march())
            .await
            .expect("query after delete");
        assert!(entries.is_empty());
    }
}
