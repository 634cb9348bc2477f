use async_trait::async_trait;
use dnsverify_domain::ResolveError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// The resolvers the operating system is configured with.
#[async_trait]
pub trait SystemResolver: Send + Sync {
    /// Configured resolver addresses, in preference order.
    fn nameservers(&self) -> Vec<IpAddr>;

    async fn resolve_ipv4(&self, host: &str) -> Result<Vec<Ipv4Addr>, ResolveError>;

    async fn resolve_ipv6(&self, host: &str) -> Result<Vec<Ipv6Addr>, ResolveError>;

    async fn resolve_cname(&self, host: &str) -> Result<Vec<String>, ResolveError>;
}
