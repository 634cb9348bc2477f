use super::glueless::IterativeAddressLookup;
use crate::ports::{AddressLookup, DnsExchange, SystemResolver};
use crate::services::{Nameserver, NameserverFailover, SystemAddressLookup};
use dnsverify_domain::limits::MAX_GLUELESS_DEPTH;
use dnsverify_domain::{
    DnsQuery, DnsResponsePacket, LookupConfig, NsResponse, RecordType, ResolveError,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::instrument;

/// Cache-independent resolver that walks delegations itself.
///
/// Every call starts from scratch: nothing learned on one lookup is reused
/// by the next, so answers always reflect what the authoritative servers
/// publish right now.
#[derive(Clone)]
pub struct DelegationResolver {
    pub(super) exchange: Arc<dyn DnsExchange>,
    pub(super) system: Arc<dyn SystemResolver>,
    pub(super) failover: NameserverFailover,
    pub(super) lookup: LookupConfig,
    glueless_depth: u8,
}

impl DelegationResolver {
    pub fn new(exchange: Arc<dyn DnsExchange>, system: Arc<dyn SystemResolver>) -> Self {
        Self {
            failover: NameserverFailover::new(Arc::clone(&exchange)),
            exchange,
            system,
            lookup: LookupConfig::default(),
            glueless_depth: 0,
        }
    }

    pub fn with_lookup_config(mut self, lookup: LookupConfig) -> Self {
        self.lookup = lookup;
        self
    }

    /// One iterative (RD=0) question to one server, with no retries.
    #[instrument(skip(self), fields(server = %server))]
    pub async fn query_dns(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
    ) -> Result<DnsResponsePacket, ResolveError> {
        let query = DnsQuery::iterative(name, record_type);
        self.exchange.exchange(&query, server).await
    }

    pub async fn resolve_with_ns(
        &self,
        query: &DnsQuery,
        nameservers: &[Nameserver],
    ) -> Option<NsResponse> {
        self.failover.resolve_with_ns(query, nameservers).await
    }

    /// Address source for NS hosts that arrive without glue.
    ///
    /// Resolved through a nested delegation walk until the depth limit,
    /// then through the OS resolvers.
    pub(super) fn referral_lookup(&self) -> Arc<dyn AddressLookup> {
        if self.glueless_depth < MAX_GLUELESS_DEPTH {
            let nested = Self {
                glueless_depth: self.glueless_depth + 1,
                ..self.clone()
            };
            Arc::new(IterativeAddressLookup::new(nested))
        } else {
            self.system_lookup()
        }
    }

    pub(super) fn system_lookup(&self) -> Arc<dyn AddressLookup> {
        Arc::new(SystemAddressLookup::new(Arc::clone(&self.system)))
    }
}
