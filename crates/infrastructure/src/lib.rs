//! dnsverify infrastructure: the UDP wire exchange and the OS resolver
//! adapters behind the application ports.
pub mod dns;
pub mod system;

pub use dns::UdpDnsExchange;
pub use system::{ResolvConf, SystemStubResolver};
