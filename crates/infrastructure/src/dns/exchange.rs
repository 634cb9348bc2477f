use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use async_trait::async_trait;
use dnsverify_application::ports::DnsExchange;
use dnsverify_domain::dns_name::normalize_name;
use dnsverify_domain::limits::{DNS_PORT, QUERY_TIMEOUT};
use dnsverify_domain::{DnsQuery, DnsResponsePacket, ResolveError};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, instrument};

/// Plain UDP exchange: no retries, no TCP fallback, no EDNS.
#[derive(Debug, Clone)]
pub struct UdpDnsExchange {
    port: u16,
    timeout: Duration,
}

impl UdpDnsExchange {
    pub fn new() -> Self {
        Self {
            port: DNS_PORT,
            timeout: QUERY_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn check_reply(query: &DnsQuery, id: u16, packet: &DnsResponsePacket) -> Result<(), ResolveError> {
        if packet.id != id {
            return Err(ResolveError::protocol(format!(
                "Response ID {} does not match query ID {}",
                packet.id, id
            )));
        }

        let echoed = packet.questions.first().map_or(false, |question| {
            question.record_type == query.record_type()
                && question.name == normalize_name(query.name())
        });
        if !echoed {
            return Err(ResolveError::protocol(format!(
                "Response does not answer {} {}",
                query.name(),
                query.record_type()
            ))
            .with_domain(query.name()));
        }

        Ok(())
    }
}

impl Default for UdpDnsExchange {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsExchange for UdpDnsExchange {
    #[instrument(skip(self, query), fields(domain = %query.name(), record_type = %query.record_type()))]
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: IpAddr,
    ) -> Result<DnsResponsePacket, ResolveError> {
        let (id, message_bytes) = MessageBuilder::build_query(query)?;

        let transport = UdpTransport::new(SocketAddr::new(server, self.port));
        let response = transport.send(&message_bytes, self.timeout).await?;

        let packet = ResponseParser::parse(&response)?;
        Self::check_reply(query, id, &packet)?;

        if packet.truncated {
            debug!(server = %server, "Truncated response, using partial answer");
        }

        Ok(packet)
    }
}
