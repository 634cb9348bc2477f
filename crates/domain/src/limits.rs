//! Fixed protocol limits and the root-server hint table.
//!
//! None of these are runtime configurable.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

pub const DNS_PORT: u16 = 53;

/// Deadline for a single request/response exchange.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Candidate nameservers kept per zone.
pub const MAX_NAMESERVERS: usize = 3;

/// CNAME hops followed before giving up. The chain fails once `step` goes past it.
pub const MAX_CNAME_STEPS: usize = 4;

/// Labels accepted in a queried name.
pub const MAX_DOMAIN_LABELS: usize = 10;

/// Nested iterative lookups for glueless nameservers before deferring to the OS resolver.
pub const MAX_GLUELESS_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootHint {
    pub name: &'static str,
    pub ipv4: Ipv4Addr,
    pub ipv6: Ipv6Addr,
}

pub const ROOT_HINTS: [RootHint; MAX_NAMESERVERS] = [
    RootHint {
        name: "a.root-servers.net",
        ipv4: Ipv4Addr::new(198, 41, 0, 4),
        ipv6: Ipv6Addr::new(0x2001, 0x503, 0xba3e, 0, 0, 0, 0x2, 0x30),
    },
    RootHint {
        name: "b.root-servers.net",
        ipv4: Ipv4Addr::new(170, 247, 170, 2),
        ipv6: Ipv6Addr::new(0x2801, 0x1b8, 0x10, 0, 0, 0, 0, 0xb),
    },
    RootHint {
        name: "c.root-servers.net",
        ipv4: Ipv4Addr::new(192, 33, 4, 12),
        ipv6: Ipv6Addr::new(0x2001, 0x500, 0x2, 0, 0, 0, 0, 0xc),
    },
];
