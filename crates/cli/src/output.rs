use dnsverify_application::AuthorityResult;
use dnsverify_domain::config::OutputFormat;
use dnsverify_domain::{DnsAnswerRecord, DnsResponsePacket, ResolveError, ResourceRecord};
use serde::Serialize;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Serialize)]
pub struct NameserverReport {
    pub ns: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Ipv4Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<Ipv6Addr>,
}

#[derive(Debug, Serialize)]
pub struct AuthorityReport {
    pub zone: String,
    pub nameservers: Vec<NameserverReport>,
}

impl AuthorityReport {
    pub async fn from_authority(authority: &AuthorityResult) -> Self {
        let mut nameservers = Vec::with_capacity(authority.nameservers.len());
        for nameserver in &authority.nameservers {
            nameservers.push(NameserverReport {
                ns: nameserver.ns().to_string(),
                ipv4: nameserver.resolve_ipv4().await,
                ipv6: nameserver.resolve_ipv6().await,
            });
        }
        Self {
            zone: authority.zone.clone(),
            nameservers,
        }
    }
}

/// Everything a command can print on success.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Record(DnsAnswerRecord),
    Authority(Option<AuthorityReport>),
    Packet(DnsResponsePacket),
}

pub fn render(outcome: &Outcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => Ok(render_text(outcome)),
    }
}

pub fn render_error(error: &ResolveError, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(error)?),
        OutputFormat::Text => Ok(format!("{}: {}", error.code, error.message)),
    }
}

fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Record(record) => record_line(&record.name, record.ttl, &record.record_type.to_string(), &record.data),
        Outcome::Authority(None) => "no authoritative nameservers found".to_string(),
        Outcome::Authority(Some(report)) => {
            let mut lines = vec![format!("zone {}", report.zone)];
            for ns in &report.nameservers {
                let mut addresses: Vec<String> = Vec::new();
                if let Some(v4) = ns.ipv4 {
                    addresses.push(v4.to_string());
                }
                if let Some(v6) = ns.ipv6 {
                    addresses.push(v6.to_string());
                }
                lines.push(format!("  {} {}", ns.ns, addresses.join(" ")).trim_end().to_string());
            }
            lines.join("\n")
        }
        Outcome::Packet(packet) => {
            let mut lines = vec![format!(
                "rcode {} id {}{}{}",
                packet.rcode,
                packet.id,
                if packet.authoritative { " aa" } else { "" },
                if packet.truncated { " tc" } else { "" }
            )];
            for (section, records) in [
                ("answer", &packet.answers),
                ("authority", &packet.authorities),
                ("additional", &packet.additionals),
            ] {
                if records.is_empty() {
                    continue;
                }
                lines.push(format!(";; {}", section));
                lines.extend(records.iter().map(resource_line));
            }
            lines.join("\n")
        }
    }
}

fn resource_line(record: &ResourceRecord) -> String {
    record_line(
        &record.name,
        record.ttl.unwrap_or(0),
        &record.record_type.to_string(),
        &record.data,
    )
}

fn record_line(name: &str, ttl: u32, record_type: &str, data: &str) -> String {
    format!("{}\t{}\t{}\t{}", name, ttl, record_type, data)
}
