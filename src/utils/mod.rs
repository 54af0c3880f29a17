//! Input validation helpers shared by the service layer.
//!
//! - [`alias_validator`] - Alias format and reserved names
//! - [`url_validator`] - Target URL parsing and scheme checks

pub mod alias_validator;
pub mod url_validator;
