//! Command inputs for ledger mutations.

use rust_decimal::Decimal;

/// Input for creating a new entry in a category.
///
/// The entry is stamped with the creation time; the category comes from
/// the ledger the command is handed to.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntryCommand {
    pub description: String,
    /// Must be strictly positive.
    pub amount: Decimal,
}

/// Partial update for an existing entry. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryUpdateCommand {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
}
