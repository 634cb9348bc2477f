use super::record_type_map::RecordTypeMapper;
use dnsverify_domain::dns_name::normalize_name;
use dnsverify_domain::{DnsQuestion, DnsResponsePacket, ResolveError, ResourceRecord, ResponseCode};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// Decodes a wire response into the domain packet model.
///
/// Every section is kept. Owner names and hostname payloads are lower-cased
/// and stripped of the root dot; record types outside [`RecordTypeMapper`]
/// are dropped.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponsePacket, ResolveError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            ResolveError::protocol(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = ResponseCode::from_u16(u16::from(message.response_code()));

        let questions = message
            .queries()
            .iter()
            .filter_map(|query| {
                RecordTypeMapper::from_hickory(query.query_type())
                    .map(|record_type| DnsQuestion::new(normalize_name(&query.name().to_utf8()), record_type))
            })
            .collect();

        let mut packet = DnsResponsePacket::new(message.id(), rcode, questions);
        packet.authoritative = message.authoritative();
        packet.truncated = message.truncated();
        packet.answers = Self::convert_section(message.answers());
        packet.authorities = Self::convert_section(message.name_servers());
        packet.additionals = Self::convert_section(message.additionals());

        debug!(
            rcode = %packet.rcode,
            answers = packet.answers.len(),
            authority = packet.authorities.len(),
            additional = packet.additionals.len(),
            truncated = packet.truncated,
            "DNS response parsed"
        );

        Ok(packet)
    }

    fn convert_section(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().filter_map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> Option<ResourceRecord> {
        let Some(record_type) = RecordTypeMapper::from_hickory(record.record_type()) else {
            debug!(record_type = %record.record_type(), "Skipping unsupported record");
            return None;
        };

        let data = match record.data() {
            RData::A(a) => a.0.to_string(),
            RData::AAAA(aaaa) => aaaa.0.to_string(),
            RData::CNAME(canonical) => normalize_name(&canonical.to_utf8()),
            RData::NS(ns) => normalize_name(&ns.to_utf8()),
            RData::PTR(ptr) => normalize_name(&ptr.to_utf8()),
            other => other.to_string(),
        };

        Some(ResourceRecord::new(
            normalize_name(&record.name().to_utf8()),
            record_type,
            Some(record.ttl()),
            data,
        ))
    }
}
