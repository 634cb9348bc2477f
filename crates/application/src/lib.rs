//! dnsverify application layer.
//!
//! Cache-independent DNS resolution for custom-domain verification: the
//! record extractor, nameserver failover, authority discovery and CNAME
//! chain following, all written against the [`ports`] so the wire and the OS
//! resolver can be swapped out.
pub mod ports;
pub mod services;
pub mod use_cases;

pub use services::{AuthorityResult, Nameserver, NameserverCandidate, NameserverFailover};
pub use use_cases::DelegationResolver;
