/// Why a dnsverify config file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read dnsverify config {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("invalid TOML in dnsverify config: {0}")]
    Parse(String),

    #[error("dnsverify config rejected: {0}")]
    Validation(String),
}
