use super::resolv_conf::{ResolvConf, DEFAULT_RESOLV_CONF};
use async_trait::async_trait;
use dnsverify_application::ports::{DnsExchange, SystemResolver};
use dnsverify_domain::dns_name::normalize_name;
use dnsverify_domain::{DnsQuery, DnsResponsePacket, RecordType, ResolveError};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::debug;

/// Stub resolver over the OS-configured nameservers.
///
/// Sends recursive queries to each configured server in turn and takes the
/// first `NOERROR` reply, the way libc's resolver would.
pub struct SystemStubResolver {
    nameservers: Vec<IpAddr>,
    exchange: Arc<dyn DnsExchange>,
}

impl SystemStubResolver {
    pub fn new(nameservers: Vec<IpAddr>, exchange: Arc<dyn DnsExchange>) -> Self {
        Self {
            nameservers,
            exchange,
        }
    }

    pub fn from_resolv_conf(exchange: Arc<dyn DnsExchange>) -> Self {
        Self::new(ResolvConf::load(DEFAULT_RESOLV_CONF).nameservers, exchange)
    }

    async fn lookup(&self, host: &str, record_type: RecordType) -> Result<Vec<String>, ResolveError> {
        let host = normalize_name(host);
        let query = DnsQuery::recursive(host.as_str(), record_type);
        let mut last_error: Option<ResolveError> = None;

        for server in &self.nameservers {
            match self.exchange.exchange(&query, *server).await {
                Ok(packet) if packet.rcode.is_success() => {
                    return Self::answers(&host, record_type, &packet);
                }
                Ok(packet) => {
                    debug!(host = %host, server = %server, rcode = %packet.rcode, "System resolver refused answer");
                    last_error = Some(ResolveError::server_rcode(&host, packet.rcode, record_type));
                }
                Err(e) => {
                    debug!(host = %host, server = %server, error = %e, "System resolver unreachable");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ResolveError::no_record(&host, "No system resolvers configured")
        }))
    }

    fn answers(
        host: &str,
        record_type: RecordType,
        packet: &DnsResponsePacket,
    ) -> Result<Vec<String>, ResolveError> {
        // Address answers may sit at the end of a CNAME chain, so any owner counts.
        let data: Vec<String> = packet
            .answers
            .iter()
            .filter(|record| record.record_type == record_type)
            .filter(|record| record_type.is_address() || record.name == host)
            .map(|record| record.data.clone())
            .collect();

        if data.is_empty() {
            return Err(ResolveError::no_record(
                host,
                format!("No {} record found for {}", record_type, host),
            ));
        }
        Ok(data)
    }
}

#[async_trait]
impl SystemResolver for SystemStubResolver {
    fn nameservers(&self) -> Vec<IpAddr> {
        self.nameservers.clone()
    }

    async fn resolve_ipv4(&self, host: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
        let data = self.lookup(host, RecordType::A).await?;
        Ok(data.iter().filter_map(|ip| ip.parse().ok()).collect())
    }

    async fn resolve_ipv6(&self, host: &str) -> Result<Vec<Ipv6Addr>, ResolveError> {
        let data = self.lookup(host, RecordType::AAAA).await?;
        Ok(data.iter().filter_map(|ip| ip.parse().ok()).collect())
    }

    async fn resolve_cname(&self, host: &str) -> Result<Vec<String>, ResolveError> {
        self.lookup(host, RecordType::CNAME).await
    }
}
