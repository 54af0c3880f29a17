//! Infrastructure layer for external integrations.
//!
//! Implements the traits declared by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Connection pool and alias repositories
//! - [`dns`] - Resolver-backed host reachability check

pub mod dns;
pub mod persistence;
