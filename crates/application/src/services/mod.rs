mod address_lookup;
mod failover;
mod nameserver;
pub mod records;

pub use address_lookup::SystemAddressLookup;
pub use failover::NameserverFailover;
pub use nameserver::{AuthorityResult, Nameserver};
pub use records::{extract_ns_servers, extract_string_answer, NameserverCandidate};
