//! Domain layer containing business entities and store contracts.
//!
//! The domain layer has no knowledge of HTTP or of a particular database.
//! Infrastructure implements the traits declared here.
//!
//! # Architecture
//!
//! - [`entities`] - Alias records as stored and as submitted
//! - [`repositories`] - Store capabilities the services rely on
//! - [`host_verifier`] - Optional reachability check for target hosts

pub mod entities;
pub mod host_verifier;
pub mod repositories;
