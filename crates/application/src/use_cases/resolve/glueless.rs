use super::DelegationResolver;
use crate::ports::AddressLookup;
use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

/// Resolves a glueless NS host with its own walk from the root.
pub(super) struct IterativeAddressLookup {
    resolver: DelegationResolver,
}

impl IterativeAddressLookup {
    pub(super) fn new(resolver: DelegationResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl AddressLookup for IterativeAddressLookup {
    async fn lookup_ipv4(&self, host: &str) -> Option<Ipv4Addr> {
        match self.resolver.query_a(host).await {
            Ok(record) => record.data.parse().ok(),
            Err(e) => {
                debug!(host = %host, code = %e.code, "Glueless IPv4 lookup failed");
                None
            }
        }
    }

    async fn lookup_ipv6(&self, host: &str) -> Option<Ipv6Addr> {
        match self.resolver.query_aaaa(host).await {
            Ok(record) => record.data.parse().ok(),
            Err(e) => {
                debug!(host = %host, code = %e.code, "Glueless IPv6 lookup failed");
                None
            }
        }
    }
}
