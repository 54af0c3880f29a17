//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request bodies
//! are additionally checked with `validator`.

pub mod alias;
pub mod health;
pub mod shorten;
