use crate::ports::{AddressLookup, SystemResolver};
use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::debug;

/// Resolves glueless nameserver hosts through the OS resolvers.
pub struct SystemAddressLookup {
    system: Arc<dyn SystemResolver>,
}

impl SystemAddressLookup {
    pub fn new(system: Arc<dyn SystemResolver>) -> Self {
        Self { system }
    }
}

#[async_trait]
impl AddressLookup for SystemAddressLookup {
    async fn lookup_ipv4(&self, host: &str) -> Option<Ipv4Addr> {
        match self.system.resolve_ipv4(host).await {
            Ok(addresses) => addresses.into_iter().next(),
            Err(e) => {
                debug!(host = %host, error = %e, "System IPv4 lookup failed");
                None
            }
        }
    }

    async fn lookup_ipv6(&self, host: &str) -> Option<Ipv6Addr> {
        match self.system.resolve_ipv6(host).await {
            Ok(addresses) => addresses.into_iter().next(),
            Err(e) => {
                debug!(host = %host, error = %e, "System IPv6 lookup failed");
                None
            }
        }
    }
}
