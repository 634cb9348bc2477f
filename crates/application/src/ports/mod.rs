mod address_lookup;
mod dns_exchange;
mod system_resolver;

pub use address_lookup::AddressLookup;
pub use dns_exchange::DnsExchange;
pub use system_resolver::SystemResolver;
