//! Resolver-backed [`HostVerifier`].

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::debug;

use crate::domain::host_verifier::{HostCheck, HostVerifier};

/// Resolves hosts through the system resolver with a bounded wait.
#[derive(Debug, Clone)]
pub struct DnsHostVerifier {
    timeout: Duration,
}

impl DnsHostVerifier {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostVerifier for DnsHostVerifier {
    async fn check(&self, host: &str, port: u16) -> HostCheck {
        match tokio::time::timeout(self.timeout, lookup_host((host, port))).await {
            Ok(Ok(mut addrs)) => {
                if addrs.next().is_some() {
                    HostCheck::Resolvable
                } else {
                    HostCheck::Unresolvable
                }
            }
            Ok(Err(e)) => classify_lookup_error(host, &e),
            Err(_) => {
                debug!(
                    host,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "DNS lookup timed out"
                );
                HostCheck::Indeterminate
            }
        }
    }
}

/// Resolver answers that mean the name definitely does not exist.
///
/// Matched case-insensitively against the error text: glibc and musl
/// (`EAI_NONAME`, `EAI_NODATA`), macOS/BSD, Windows, and raw NXDOMAIN.
const NO_SUCH_HOST_MARKERS: &[&str] = &[
    "name or service not known",
    "nodename nor servname provided",
    "no address associated with hostname",
    "no such host is known",
    "nxdomain",
];

/// Separates "no such host" from resolver hiccups.
///
/// Only a recognised negative answer is unresolvable. Everything else
/// (`EAI_AGAIN`, `EAI_FAIL`, `EAI_SYSTEM`, I/O errors) is indeterminate.
fn classify_lookup_error(host: &str, e: &std::io::Error) -> HostCheck {
    let message = e.to_string().to_ascii_lowercase();
    let no_such_host = NO_SUCH_HOST_MARKERS
        .iter()
        .any(|marker| message.contains(marker));

    debug!(host, error = %e, no_such_host, "DNS lookup failed");

    if no_such_host {
        HostCheck::Unresolvable
    } else {
        HostCheck::Indeterminate
    }
}
