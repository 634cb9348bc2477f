use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Lazy address source for a nameserver that came without glue.
///
/// `None` means the host has no usable address of that family; lookups
/// never fail loudly.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup_ipv4(&self, host: &str) -> Option<Ipv4Addr>;

    async fn lookup_ipv6(&self, host: &str) -> Option<Ipv6Addr>;
}
