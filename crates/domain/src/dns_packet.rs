use super::{DnsQuestion, ResourceRecord};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;

/// RCODE of a response header, including the RFC 2136 update codes that
/// authoritative servers occasionally return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    YXDomain,
    YXRRSet,
    NXRRSet,
    NotAuth,
    NotZone,
    Unknown(u16),
}

impl ResponseCode {
    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            6 => ResponseCode::YXDomain,
            7 => ResponseCode::YXRRSet,
            8 => ResponseCode::NXRRSet,
            9 => ResponseCode::NotAuth,
            10 => ResponseCode::NotZone,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            ResponseCode::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::NoError)
    }

    /// A DNS-level verdict from the server itself. Asking another
    /// nameserver of the same zone will not change it.
    pub fn is_definitive_error(&self) -> bool {
        matches!(
            self,
            ResponseCode::NXDomain
                | ResponseCode::ServFail
                | ResponseCode::Refused
                | ResponseCode::NotImp
                | ResponseCode::YXDomain
                | ResponseCode::YXRRSet
                | ResponseCode::NXRRSet
                | ResponseCode::NotAuth
                | ResponseCode::NotZone
        )
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Unknown(code) => write!(f, "RCODE{}", code),
            other => f.write_str(other.as_str()),
        }
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A decoded response message. Section order is exactly the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsResponsePacket {
    pub id: u16,

    pub rcode: ResponseCode,

    pub authoritative: bool,

    pub truncated: bool,

    pub questions: Vec<DnsQuestion>,

    pub answers: Vec<ResourceRecord>,

    pub authorities: Vec<ResourceRecord>,

    pub additionals: Vec<ResourceRecord>,
}

impl DnsResponsePacket {
    pub fn new(id: u16, rcode: ResponseCode, questions: Vec<DnsQuestion>) -> Self {
        Self {
            id,
            rcode,
            authoritative: false,
            truncated: false,
            questions,
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    /// Answers, then authorities, then additionals.
    pub fn all_records(&self) -> Vec<ResourceRecord> {
        let mut records =
            Vec::with_capacity(self.answers.len() + self.authorities.len() + self.additionals.len());
        records.extend_from_slice(&self.answers);
        records.extend_from_slice(&self.authorities);
        records.extend_from_slice(&self.additionals);
        records
    }
}

/// The nameserver that actually produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredBy {
    pub host: String,
    pub ip: IpAddr,
}

#[derive(Debug, Clone)]
pub struct NsResponse {
    pub packet: DnsResponsePacket,
    pub ns: AnsweredBy,
}
