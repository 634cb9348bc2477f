use dnsverify_application::ports::{DnsExchange, SystemResolver};
use dnsverify_application::DelegationResolver;
use dnsverify_domain::Config;
use dnsverify_infrastructure::{SystemStubResolver, UdpDnsExchange};
use std::sync::Arc;
use tracing::{debug, warn};

/// Wires the UDP exchange and the resolv.conf resolvers into a resolver.
pub fn build_resolver(config: &Config) -> DelegationResolver {
    let exchange: Arc<dyn DnsExchange> = Arc::new(UdpDnsExchange::new());
    let system = SystemStubResolver::from_resolv_conf(Arc::clone(&exchange));

    let nameservers = system.nameservers();
    if nameservers.is_empty() {
        warn!("No system nameservers found; local lookups and fallback are unavailable");
    } else {
        debug!(nameservers = ?nameservers, "System resolvers loaded");
    }

    DelegationResolver::new(exchange, Arc::new(system)).with_lookup_config(config.lookup.clone())
}
