//! # Storage Module
//!
//! Abstraction over whatever persists a user's entries.
//!
//! The engine owns no persistence: the domain layer depends only on the
//! [`traits::RecordSource`] seam, so backends (cloud document stores, SQL,
//! flat files) can be swapped without touching domain logic. The bundled
//! [`memory::MemorySource`] is the reference implementation used by tests
//! and demo embeddings.

pub mod memory;
pub mod traits;

pub use memory::MemorySource;
pub use traits::{EntryDraft, EntryPatch, RecordSource, ScopeToken};
