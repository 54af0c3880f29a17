//! Reachability check for the host of a target URL.

use async_trait::async_trait;

/// Outcome of a host lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCheck {
    /// The host resolved to at least one address.
    Resolvable,
    /// The resolver answered and the host has no address.
    Unresolvable,
    /// No definite answer (timeout, transient resolver failure).
    Indeterminate,
}

/// Best-effort check that a URL host resolves.
///
/// The answer is advisory. Only [`HostCheck::Unresolvable`] may reject input;
/// [`HostCheck::Indeterminate`] must never be treated as a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostVerifier: Send + Sync {
    async fn check(&self, host: &str, port: u16) -> HostCheck;
}
