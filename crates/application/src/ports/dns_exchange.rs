use async_trait::async_trait;
use dnsverify_domain::{DnsQuery, DnsResponsePacket, ResolveError};
use std::net::IpAddr;

/// One request/response round trip with a nameserver.
///
/// Implementations open a fresh socket per call, never retry, and fail with
/// `TIMEOUT`, `NETWORK_ERROR` or `DNS_ERROR`. The rcode of a decoded reply is
/// left for the caller to judge.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: IpAddr,
    ) -> Result<DnsResponsePacket, ResolveError>;
}
