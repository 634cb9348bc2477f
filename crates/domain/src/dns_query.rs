use super::RecordType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsQuestion {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,
}

impl DnsQuestion {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}

/// One outgoing request: a single question plus the RD flag.
///
/// Authoritative servers are always asked iteratively; only the OS
/// resolvers get recursion-desired queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub question: DnsQuestion,
    pub recursion_desired: bool,
}

impl DnsQuery {
    pub fn iterative(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            question: DnsQuestion::new(name, record_type),
            recursion_desired: false,
        }
    }

    pub fn recursive(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            question: DnsQuestion::new(name, record_type),
            recursion_desired: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.question.name
    }

    pub fn record_type(&self) -> RecordType {
        self.question.record_type
    }
}
