//! Domain model for a ledger entry.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two collections a user's ledger is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Expense,
    Revenue,
}

impl Category {
    /// Name of the backing collection for this category.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Category::Expense => "expenses",
            Category::Revenue => "revenues",
        }
    }
}

/// A single dated monetary entry, tagged expense or revenue.
///
/// `id` is assigned by the record source on creation and is unique within
/// the category's collection. `category` and `date` are fixed at creation;
/// only `description` and `amount` may change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub description: String,
    /// Non-negative currency amount at full precision. Rounding to two
    /// decimals happens at the DTO boundary only.
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_names_match_the_backing_store() {
        assert_eq!(Category::Expense.collection_name(), "expenses");
        assert_eq!(Category::Revenue.collection_name(), "revenues");
    }
}
