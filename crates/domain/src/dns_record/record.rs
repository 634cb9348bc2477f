use super::RecordType;
use serde::Serialize;

/// A resource record as decoded from one section of a response.
///
/// `data` is the textual payload: an address for `A`/`AAAA`, a hostname for
/// `NS`/`CNAME`/`PTR`, the presentation format for everything else. Names are
/// lower-case without the trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub ttl: Option<u32>,

    pub data: String,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: Option<u32>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}

/// A record handed back to callers. `ttl` is always present; a record that
/// arrived without one reports `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsAnswerRecord {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub ttl: u32,

    pub data: String,
}

impl DnsAnswerRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}

impl From<&ResourceRecord> for DnsAnswerRecord {
    fn from(record: &ResourceRecord) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.record_type,
            ttl: record.ttl.unwrap_or(0),
            data: record.data.clone(),
        }
    }
}
