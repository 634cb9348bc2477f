//! DNS Message Builder
//!
//! Serializes a [`DnsQuery`] to wire format using `hickory-proto`: one
//! question, class IN, a random ID and the query's RD flag.

use super::record_type_map::RecordTypeMapper;
use dnsverify_domain::{DnsQuery, ResolveError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Returns the message ID alongside the bytes so the reply can be matched.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), ResolveError> {
        let name = Name::from_str(query.name()).map_err(|e| {
            ResolveError::protocol(format!("Invalid domain '{}': {}", query.name(), e))
                .with_domain(query.name())
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type()));
        question.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(query.recursion_desired);
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, ResolveError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            ResolveError::protocol(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
