use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

use crate::domain::host_resolver::HostResolver;

/// Resolves hosts with [`tokio::net::lookup_host`], which runs the system
/// resolver (`getaddrinfo`) on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((host, 0)).await?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}
