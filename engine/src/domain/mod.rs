//! # Domain Module
//!
//! Business logic for the ledger engine, independent of any UI framework
//! or storage mechanism.
//!
//! ## Module Organization
//!
//! - **models**: entries, categories, and time windows
//! - **aggregation**: pure reduction into totals and share-of-total
//! - **ledger_service**: per-category CRUD and cached aggregation
//! - **report_service**: cross-category balance, alert, and chart series
//! - **commands**: mutation inputs
//! - **errors**: the engine's error taxonomy
//!
//! ## Business Rules
//!
//! - Entries must have a non-empty description and a positive amount
//! - Periods are inclusive on both bounds; a category ledger owns its own
//! - Percentage-of-total math lives in one place, with the zero guard
//! - A superseded load never overwrites newer data

pub mod aggregation;
pub mod commands;
pub mod errors;
pub mod ledger_service;
pub mod models;
pub mod report_service;
