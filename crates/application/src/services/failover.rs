use crate::ports::DnsExchange;
use crate::services::Nameserver;
use dnsverify_domain::{AnsweredBy, DnsQuery, NsResponse};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sequential nameserver failover.
///
/// Candidates are tried strictly in order, never in parallel. The first
/// `NOERROR` reply wins. A definitive error rcode (see
/// [`dnsverify_domain::ResponseCode::is_definitive_error`]) is the zone's final word and is
/// returned as well. Timeouts, socket errors, undecodable replies and any
/// other rcode move on to the next candidate.
#[derive(Clone)]
pub struct NameserverFailover {
    exchange: Arc<dyn DnsExchange>,
}

impl NameserverFailover {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self { exchange }
    }

    /// Returns `None` once every candidate is exhausted. Never errors.
    pub async fn resolve_with_ns(
        &self,
        query: &DnsQuery,
        nameservers: &[Nameserver],
    ) -> Option<NsResponse> {
        for nameserver in nameservers {
            let Some(ip) = Self::address_of(nameserver).await else {
                debug!(ns = %nameserver.ns(), "Nameserver has no usable address, skipping");
                continue;
            };

            match self.exchange.exchange(query, ip).await {
                Ok(packet) if packet.rcode.is_success() || packet.rcode.is_definitive_error() => {
                    debug!(
                        domain = %query.name(),
                        record_type = %query.record_type(),
                        ns = %nameserver.ns(),
                        server = %ip,
                        rcode = %packet.rcode,
                        answers = packet.answers.len(),
                        "Nameserver answered"
                    );
                    return Some(NsResponse {
                        packet,
                        ns: AnsweredBy {
                            host: nameserver.ns().to_string(),
                            ip,
                        },
                    });
                }
                Ok(packet) => {
                    warn!(
                        domain = %query.name(),
                        ns = %nameserver.ns(),
                        server = %ip,
                        rcode = %packet.rcode,
                        "Unusable rcode, trying next nameserver"
                    );
                }
                Err(e) => {
                    warn!(
                        domain = %query.name(),
                        ns = %nameserver.ns(),
                        server = %ip,
                        code = %e.code,
                        error = %e,
                        "Nameserver query failed, trying next nameserver"
                    );
                }
            }
        }

        debug!(
            domain = %query.name(),
            record_type = %query.record_type(),
            candidates = nameservers.len(),
            "All nameservers failed"
        );
        None
    }

    async fn address_of(nameserver: &Nameserver) -> Option<IpAddr> {
        if let Some(v4) = nameserver.resolve_ipv4().await {
            return Some(IpAddr::V4(v4));
        }
        nameserver.resolve_ipv6().await.map(IpAddr::V6)
    }
}
