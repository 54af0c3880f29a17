//! Application layer services implementing business logic.
//!
//! Services consume the domain's repository traits and give HTTP handlers and
//! the admin binary one place where the alias rules live.
//!
//! # Available Services
//!
//! - [`services::alias_service::AliasService`] - Alias creation and resolution

pub mod services;
