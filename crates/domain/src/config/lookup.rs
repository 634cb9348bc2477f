use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where the chain resolver discovers authoritative nameservers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthoritySource {
    /// Walk delegations from the root hints.
    #[default]
    Root,
    /// Ask the OS resolvers for NS first, walk from the root on a miss.
    LocalFirst,
}

impl FromStr for AuthoritySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "root" => Ok(AuthoritySource::Root),
            "local-first" | "local" => Ok(AuthoritySource::LocalFirst),
            _ => Err(format!("Unknown authority source: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub authority: AuthoritySource,

    /// Ask the OS resolver when independent resolution finds no record.
    #[serde(default)]
    pub system_fallback: bool,
}
