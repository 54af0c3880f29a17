//! Alias storage.
//!
//! - [`connect`] - Opens the single pooled PostgreSQL handle
//! - [`PgAliasRepository`] - PostgreSQL repository
//! - [`InMemoryAliasRepository`] - Process-local repository with the same guarantees

pub mod connection;
pub mod memory_alias_repository;
pub mod pg_alias_repository;

pub use connection::{ConnectionError, connect, migrate};
pub use memory_alias_repository::InMemoryAliasRepository;
pub use pg_alias_repository::PgAliasRepository;
