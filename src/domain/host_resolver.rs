//! Hostname resolution contract used by URL validation.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// Resolves a hostname to its addresses.
///
/// An empty address list means the host does not exist. Implementations must
/// not block the runtime while waiting on the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
