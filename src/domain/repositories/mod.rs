//! Repository trait definitions for the domain layer.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL
//! - [`crate::infrastructure::persistence::InMemoryAliasRepository`] - process-local
//! - `MockAliasRepository` - generated by `mockall` under `cfg(test)`

pub mod alias_repository;

pub use alias_repository::AliasRepository;

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
