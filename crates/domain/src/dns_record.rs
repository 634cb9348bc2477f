mod record;
mod record_type;

pub use record::{DnsAnswerRecord, ResourceRecord};
pub use record_type::RecordType;
