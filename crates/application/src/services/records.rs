//! Pure filtering over the record sections of a response.

use dnsverify_domain::dns_name::normalize_name;
use dnsverify_domain::limits::MAX_NAMESERVERS;
use dnsverify_domain::{DnsAnswerRecord, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, Ipv6Addr};

/// An NS target from a referral, with any glue found in the same response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameserverCandidate {
    pub ns: String,
    pub glue_ipv4: Option<Ipv4Addr>,
    pub glue_ipv6: Option<Ipv6Addr>,
}

/// Records whose type is one of `target_types`, in their original order.
pub fn extract_string_answer(
    answers: &[ResourceRecord],
    target_types: &[RecordType],
) -> Vec<DnsAnswerRecord> {
    if answers.is_empty() || target_types.is_empty() {
        return Vec::new();
    }

    answers
        .iter()
        .filter(|answer| target_types.contains(&answer.record_type))
        .map(DnsAnswerRecord::from)
        .collect()
}

/// NS hosts delegated for exactly `domain`, first [`MAX_NAMESERVERS`] in
/// appearance order, deduplicated by hostname.
///
/// `records` is every section of one response, so glue from the additional
/// section is picked up alongside the NS records.
pub fn extract_ns_servers(domain: &str, records: &[ResourceRecord]) -> Vec<NameserverCandidate> {
    let zone = normalize_name(domain);
    let mut candidates: Vec<NameserverCandidate> = Vec::with_capacity(MAX_NAMESERVERS);

    let delegations = records
        .iter()
        .filter(|record| record.record_type == RecordType::NS && normalize_name(&record.name) == zone);

    for record in delegations {
        let host = normalize_name(&record.data);
        if host.is_empty() || candidates.iter().any(|c| c.ns == host) {
            continue;
        }

        candidates.push(NameserverCandidate {
            glue_ipv4: find_glue(records, &host, RecordType::A).and_then(|ip| ip.parse().ok()),
            glue_ipv6: find_glue(records, &host, RecordType::AAAA).and_then(|ip| ip.parse().ok()),
            ns: host,
        });

        if candidates.len() == MAX_NAMESERVERS {
            break;
        }
    }

    candidates
}

fn find_glue<'a>(records: &'a [ResourceRecord], host: &str, record_type: RecordType) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.record_type == record_type && normalize_name(&record.name) == host)
        .map(|record| record.data.as_str())
}
