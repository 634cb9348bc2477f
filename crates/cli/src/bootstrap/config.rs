use dnsverify_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    debug!(
        authority = ?config.lookup.authority,
        system_fallback = config.lookup.system_fallback,
        "Configuration loaded"
    );
    Ok(config)
}
