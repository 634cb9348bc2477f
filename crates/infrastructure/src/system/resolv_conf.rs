use std::net::IpAddr;
use tracing::{debug, warn};

pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// The OS resolvers listed in a resolv.conf file, in preference order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvConf {
    pub nameservers: Vec<IpAddr>,
}

impl ResolvConf {
    /// Reads `path`; an unreadable or malformed file yields no nameservers.
    pub fn load(path: &str) -> Self {
        match std::fs::read(path) {
            Ok(content) => {
                let conf = Self::parse(&content);
                debug!(path = %path, nameservers = conf.nameservers.len(), "resolv.conf loaded");
                conf
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Failed to read resolv.conf");
                Self::default()
            }
        }
    }

    pub fn parse(content: &[u8]) -> Self {
        let config = match resolv_conf::Config::parse(content) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to parse resolv.conf");
                return Self::default();
            }
        };

        let mut nameservers: Vec<IpAddr> = Vec::with_capacity(config.nameservers.len());
        for scoped in config.nameservers {
            let ip: IpAddr = scoped.into();
            if !nameservers.contains(&ip) {
                nameservers.push(ip);
            }
        }

        Self { nameservers }
    }
}
