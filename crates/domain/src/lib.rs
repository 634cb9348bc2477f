//! dnsverify domain layer: records, packets, errors, limits and configuration.
pub mod config;
pub mod dns_name;
pub mod dns_packet;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod limits;

pub use config::{AuthoritySource, CliOverrides, Config, ConfigError, LookupConfig};
pub use dns_packet::{AnsweredBy, DnsResponsePacket, NsResponse, ResponseCode};
pub use dns_query::{DnsQuery, DnsQuestion};
pub use dns_record::{DnsAnswerRecord, RecordType, ResourceRecord};
pub use errors::{ErrorDetails, ResolveError, ResolveErrorCode};
