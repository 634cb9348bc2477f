use crate::{RecordType, ResponseCode};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;
use thiserror::Error;

/// Closed set of failure kinds surfaced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveErrorCode {
    /// No response before the deadline.
    Timeout,
    /// Socket could not be opened, or the datagram could not be sent or received.
    NetworkError,
    /// Undecodable or mismatched reply, or a server-side rcode.
    DnsError,
    /// Resolution completed without the requested record.
    NoRecord,
    /// A CNAME chain revisited a name.
    CnameLoop,
    /// A CNAME chain was longer than the step limit.
    MaxCnameStepsExceeded,
    /// Input rejected before any I/O.
    DomainTooLong,
}

impl ResolveErrorCode {
    pub const ALL: [ResolveErrorCode; 7] = [
        ResolveErrorCode::Timeout,
        ResolveErrorCode::NetworkError,
        ResolveErrorCode::DnsError,
        ResolveErrorCode::NoRecord,
        ResolveErrorCode::CnameLoop,
        ResolveErrorCode::MaxCnameStepsExceeded,
        ResolveErrorCode::DomainTooLong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveErrorCode::Timeout => "TIMEOUT",
            ResolveErrorCode::NetworkError => "NETWORK_ERROR",
            ResolveErrorCode::DnsError => "DNS_ERROR",
            ResolveErrorCode::NoRecord => "NO_RECORD",
            ResolveErrorCode::CnameLoop => "CNAME_LOOP",
            ResolveErrorCode::MaxCnameStepsExceeded => "MAX_CNAME_STEPS_EXCEEDED",
            ResolveErrorCode::DomainTooLong => "DOMAIN_TOO_LONG",
        }
    }
}

impl fmt::Display for ResolveErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResolveErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Diagnostic payload attached to a [`ResolveError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Visited {
        visited: Vec<String>,
    },
    Step {
        step: usize,
    },
    Rcode {
        rcode: ResponseCode,
        #[serde(rename = "targetType")]
        target_type: RecordType,
    },
    Server {
        server: IpAddr,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ResolveError {
    pub code: ResolveErrorCode,

    pub message: String,

    /// Name being processed when the failure happened. For CNAME chains this
    /// is where the chain stopped, not necessarily the name asked about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

impl ResolveError {
    pub fn new(code: ResolveErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            domain: None,
            details: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn timeout(server: IpAddr) -> Self {
        Self::new(
            ResolveErrorCode::Timeout,
            format!("Timeout querying {} for DNS answers", server),
        )
        .with_details(ErrorDetails::Server { server })
    }

    pub fn network(server: IpAddr, reason: impl fmt::Display) -> Self {
        Self::new(
            ResolveErrorCode::NetworkError,
            format!("Network error talking to {}: {}", server, reason),
        )
        .with_details(ErrorDetails::Server { server })
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(ResolveErrorCode::DnsError, message)
    }

    pub fn server_rcode(domain: &str, rcode: ResponseCode, target_type: RecordType) -> Self {
        Self::new(
            ResolveErrorCode::DnsError,
            format!("Nameserver answered {} for {} {}", rcode, domain, target_type),
        )
        .with_domain(domain)
        .with_details(ErrorDetails::Rcode { rcode, target_type })
    }

    pub fn no_record(domain: &str, message: impl Into<String>) -> Self {
        Self::new(ResolveErrorCode::NoRecord, message).with_domain(domain)
    }

    pub fn cname_loop(domain: &str, visited: Vec<String>) -> Self {
        Self::new(
            ResolveErrorCode::CnameLoop,
            format!(
                "CNAME loop detected: {} already visited in chain: {}",
                domain,
                visited.join(" -> ")
            ),
        )
        .with_domain(domain)
        .with_details(ErrorDetails::Visited { visited })
    }

    pub fn max_cname_steps(domain: &str, step: usize) -> Self {
        Self::new(
            ResolveErrorCode::MaxCnameStepsExceeded,
            format!(
                "CNAME chain exceeded {} steps at {}",
                step.saturating_sub(1),
                domain
            ),
        )
        .with_domain(domain)
        .with_details(ErrorDetails::Step { step })
    }

    pub fn domain_too_long(domain: &str, limit: usize) -> Self {
        Self::new(
            ResolveErrorCode::DomainTooLong,
            format!("Domain level exceeds the limit of {}", limit),
        )
        .with_domain(domain)
    }

    pub fn is_timeout(&self) -> bool {
        self.code == ResolveErrorCode::Timeout
    }
}
