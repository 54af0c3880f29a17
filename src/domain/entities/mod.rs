//! Core domain entities.
//!
//! - [`AliasRecord`] - A persisted alias with its click counter
//! - [`NewAlias`] - Validated input for creating a record
//! - [`AliasStats`] - Store-wide totals

pub mod alias;

pub use alias::{AliasRecord, AliasStats, NewAlias};
