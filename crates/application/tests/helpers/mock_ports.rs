use async_trait::async_trait;
use dnsverify_application::ports::{DnsExchange, SystemResolver};
use dnsverify_domain::{DnsQuery, DnsResponsePacket, RecordType, ResolveError};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::{Arc, Mutex, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCall {
    pub server: IpAddr,
    pub name: String,
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

/// Scripted nameservers keyed by (server, name, type).
///
/// Anything not scripted times out, like a server that never answers.
#[derive(Clone, Default)]
pub struct MockDnsExchange {
    responses: Arc<RwLock<HashMap<(IpAddr, String, RecordType), DnsResponsePacket>>>,
    failures: Arc<RwLock<HashMap<IpAddr, ResolveError>>>,
    calls: Arc<Mutex<Vec<ExchangeCall>>>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: &str, name: &str, record_type: RecordType, packet: DnsResponsePacket) {
        self.responses
            .write()
            .unwrap()
            .insert((ip(server), name.to_string(), record_type), packet);
    }

    pub fn fail(&self, server: &str, error: ResolveError) {
        self.failures.write().unwrap().insert(ip(server), error);
    }

    pub fn calls(&self) -> Vec<ExchangeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, server: &str) -> Vec<ExchangeCall> {
        let server = ip(server);
        self.calls()
            .into_iter()
            .filter(|call| call.server == server)
            .collect()
    }
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: IpAddr,
    ) -> Result<DnsResponsePacket, ResolveError> {
        self.calls.lock().unwrap().push(ExchangeCall {
            server,
            name: query.name().to_string(),
            record_type: query.record_type(),
            recursion_desired: query.recursion_desired,
        });

        if let Some(error) = self.failures.read().unwrap().get(&server) {
            return Err(error.clone());
        }

        self.responses
            .read()
            .unwrap()
            .get(&(server, query.name().to_string(), query.record_type()))
            .cloned()
            .ok_or_else(|| ResolveError::timeout(server))
    }
}

#[derive(Default)]
pub struct MockSystemResolver {
    nameservers: Vec<IpAddr>,
    ipv4: HashMap<String, Vec<Ipv4Addr>>,
    ipv6: HashMap<String, Vec<Ipv6Addr>>,
    cnames: HashMap<String, Vec<String>>,
}

impl MockSystemResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nameservers(mut self, servers: &[&str]) -> Self {
        self.nameservers = servers.iter().map(|s| ip(s)).collect();
        self
    }

    pub fn with_ipv4(mut self, host: &str, address: &str) -> Self {
        self.ipv4
            .entry(host.to_string())
            .or_default()
            .push(address.parse().unwrap());
        self
    }

    pub fn with_ipv6(mut self, host: &str, address: &str) -> Self {
        self.ipv6
            .entry(host.to_string())
            .or_default()
            .push(address.parse().unwrap());
        self
    }

    pub fn with_cname(mut self, host: &str, target: &str) -> Self {
        self.cnames
            .entry(host.to_string())
            .or_default()
            .push(target.to_string());
        self
    }
}

#[async_trait]
impl SystemResolver for MockSystemResolver {
    fn nameservers(&self) -> Vec<IpAddr> {
        self.nameservers.clone()
    }

    async fn resolve_ipv4(&self, host: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
        self.ipv4
            .get(host)
            .cloned()
            .ok_or_else(|| ResolveError::no_record(host, format!("{} has no A record", host)))
    }

    async fn resolve_ipv6(&self, host: &str) -> Result<Vec<Ipv6Addr>, ResolveError> {
        self.ipv6
            .get(host)
            .cloned()
            .ok_or_else(|| ResolveError::no_record(host, format!("{} has no AAAA record", host)))
    }

    async fn resolve_cname(&self, host: &str) -> Result<Vec<String>, ResolveError> {
        self.cnames
            .get(host)
            .cloned()
            .ok_or_else(|| ResolveError::no_record(host, format!("{} has no CNAME record", host)))
    }
}

pub fn ip(address: &str) -> IpAddr {
    address.parse().unwrap()
}
