use crate::ports::AddressLookup;
use crate::services::records::NameserverCandidate;
use dnsverify_domain::limits::{MAX_NAMESERVERS, ROOT_HINTS};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// A server the failover loop may ask, with its addresses resolved lazily.
///
/// Glue wins when present; otherwise the attached [`AddressLookup`] is asked
/// on first use. A nameserver without glue or lookup simply has no address.
#[derive(Clone)]
pub struct Nameserver {
    ns: String,
    glue_ipv4: Option<Ipv4Addr>,
    glue_ipv6: Option<Ipv6Addr>,
    lookup: Option<Arc<dyn AddressLookup>>,
}

impl Nameserver {
    pub fn with_addresses(
        ns: impl Into<String>,
        ipv4: Option<Ipv4Addr>,
        ipv6: Option<Ipv6Addr>,
    ) -> Self {
        Self {
            ns: ns.into(),
            glue_ipv4: ipv4,
            glue_ipv6: ipv6,
            lookup: None,
        }
    }

    /// An OS resolver known only by address.
    pub fn from_ip(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self::with_addresses(ip.to_string(), Some(v4), None),
            IpAddr::V6(v6) => Self::with_addresses(ip.to_string(), None, Some(v6)),
        }
    }

    pub fn from_candidate(candidate: NameserverCandidate, lookup: Arc<dyn AddressLookup>) -> Self {
        Self {
            ns: candidate.ns,
            glue_ipv4: candidate.glue_ipv4,
            glue_ipv6: candidate.glue_ipv6,
            lookup: Some(lookup),
        }
    }

    pub fn root_hints() -> Vec<Self> {
        ROOT_HINTS
            .iter()
            .map(|hint| Self::with_addresses(hint.name, Some(hint.ipv4), Some(hint.ipv6)))
            .collect()
    }

    pub fn ns(&self) -> &str {
        &self.ns
    }

    pub fn has_glue(&self) -> bool {
        self.glue_ipv4.is_some() || self.glue_ipv6.is_some()
    }

    pub async fn resolve_ipv4(&self) -> Option<Ipv4Addr> {
        if let Some(ip) = self.glue_ipv4 {
            return Some(ip);
        }
        match &self.lookup {
            Some(lookup) => lookup.lookup_ipv4(&self.ns).await,
            None => None,
        }
    }

    pub async fn resolve_ipv6(&self) -> Option<Ipv6Addr> {
        if let Some(ip) = self.glue_ipv6 {
            return Some(ip);
        }
        match &self.lookup {
            Some(lookup) => lookup.lookup_ipv6(&self.ns).await,
            None => None,
        }
    }
}

impl fmt::Debug for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nameserver")
            .field("ns", &self.ns)
            .field("glue_ipv4", &self.glue_ipv4)
            .field("glue_ipv6", &self.glue_ipv6)
            .field("lookup", &self.lookup.is_some())
            .finish()
    }
}

/// The deepest zone found to be delegated, and who serves it.
#[derive(Debug, Clone)]
pub struct AuthorityResult {
    pub zone: String,
    pub nameservers: Vec<Nameserver>,
}

impl AuthorityResult {
    pub fn new(zone: impl Into<String>, mut nameservers: Vec<Nameserver>) -> Self {
        nameservers.truncate(MAX_NAMESERVERS);
        Self {
            zone: zone.into(),
            nameservers,
        }
    }

    pub fn hosts(&self) -> Vec<&str> {
        self.nameservers.iter().map(Nameserver::ns).collect()
    }
}
