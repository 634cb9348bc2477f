use crate::limits::MAX_DOMAIN_LABELS;
use crate::ResolveError;

/// Canonical form used for every comparison: trimmed, lower-case, no trailing dot.
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

pub fn labels(domain: &str) -> Vec<&str> {
    domain.split('.').filter(|label| !label.is_empty()).collect()
}

/// Rejects names with more than [`MAX_DOMAIN_LABELS`] labels.
pub fn check_label_count(domain: &str) -> Result<(), ResolveError> {
    if labels(domain).len() > MAX_DOMAIN_LABELS {
        return Err(ResolveError::domain_too_long(domain, MAX_DOMAIN_LABELS));
    }
    Ok(())
}

/// Every zone cut candidate from the TLD down to the full name.
///
/// `www.example.org` yields `org`, `example.org`, `www.example.org`.
pub fn suffixes_from_tld(domain: &str) -> Vec<String> {
    let labels = labels(domain);
    (0..labels.len())
        .rev()
        .map(|start| labels[start..].join("."))
        .collect()
}

/// The full name first, then each parent, down to the TLD.
pub fn ancestors(domain: &str) -> Vec<String> {
    let mut zones = suffixes_from_tld(domain);
    zones.reverse();
    zones
}
