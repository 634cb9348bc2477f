use super::DelegationResolver;
use crate::services::{extract_ns_servers, AuthorityResult, Nameserver};
use dnsverify_domain::dns_name::{ancestors, check_label_count, normalize_name, suffixes_from_tld};
use dnsverify_domain::limits::MAX_NAMESERVERS;
use dnsverify_domain::{DnsQuery, RecordType, ResolveError};
use tracing::{debug, instrument, warn};

impl DelegationResolver {
    /// Walks the delegation chain from the root hints down to `domain`.
    ///
    /// Each suffix from the TLD inward is asked for its NS set, using the
    /// servers of the deepest delegation found so far. A level that yields
    /// no delegation is skipped; once some authority is known, a level that
    /// gets no usable answer at all ends the walk.
    #[instrument(skip(self))]
    pub async fn authoritative_ns_from_root(
        &self,
        domain: &str,
    ) -> Result<Option<AuthorityResult>, ResolveError> {
        let domain = normalize_name(domain);
        check_label_count(&domain)?;

        let root = Nameserver::root_hints();
        let referral_lookup = self.referral_lookup();
        let mut authority: Option<AuthorityResult> = None;

        for zone in suffixes_from_tld(&domain) {
            let nameservers = match &authority {
                Some(current) => current.nameservers.as_slice(),
                None => root.as_slice(),
            };

            let query = DnsQuery::iterative(zone.as_str(), RecordType::NS);
            let response = self
                .failover
                .resolve_with_ns(&query, nameservers)
                .await
                .filter(|response| response.packet.rcode.is_success());

            let Some(response) = response else {
                if authority.is_some() {
                    debug!(zone = %zone, "No answer below the current delegation, stopping");
                    break;
                }
                continue;
            };

            let candidates = extract_ns_servers(&zone, &response.packet.all_records());
            if candidates.is_empty() {
                debug!(zone = %zone, answered_by = %response.ns.host, "No delegation at this level");
                continue;
            }

            debug!(
                zone = %zone,
                answered_by = %response.ns.host,
                nameservers = candidates.len(),
                "Delegation found"
            );

            let nameservers = candidates
                .into_iter()
                .map(|candidate| Nameserver::from_candidate(candidate, referral_lookup.clone()))
                .collect();
            authority = Some(AuthorityResult::new(zone, nameservers));
        }

        match &authority {
            Some(found) => debug!(zone = %found.zone, nameservers = ?found.hosts(), "Authority resolved"),
            None => debug!("No authority found from the root"),
        }
        Ok(authority)
    }

    /// Asks the OS resolvers for the NS set of `domain`, then of each parent,
    /// and returns the first zone that has one.
    #[instrument(skip(self))]
    pub async fn authoritative_ns_from_local(
        &self,
        domain: &str,
    ) -> Result<Option<AuthorityResult>, ResolveError> {
        let domain = normalize_name(domain);
        if domain.is_empty() {
            return Ok(None);
        }
        check_label_count(&domain)?;

        let resolvers: Vec<Nameserver> = self
            .system
            .nameservers()
            .into_iter()
            .take(MAX_NAMESERVERS)
            .map(Nameserver::from_ip)
            .collect();
        if resolvers.is_empty() {
            warn!("No system resolvers configured");
            return Ok(None);
        }

        let lookup = self.system_lookup();

        for zone in ancestors(&domain) {
            let query = DnsQuery::recursive(zone.as_str(), RecordType::NS);
            let Some(response) = self.failover.resolve_with_ns(&query, &resolvers).await else {
                debug!(zone = %zone, "System resolvers unreachable");
                return Ok(None);
            };

            if !response.packet.rcode.is_success() {
                debug!(zone = %zone, rcode = %response.packet.rcode, "Trying parent zone");
                continue;
            }

            let candidates = extract_ns_servers(&zone, &response.packet.all_records());
            if candidates.is_empty() {
                continue;
            }

            debug!(zone = %zone, nameservers = candidates.len(), "Authority resolved locally");
            let nameservers = candidates
                .into_iter()
                .map(|candidate| Nameserver::from_candidate(candidate, lookup.clone()))
                .collect();
            return Ok(Some(AuthorityResult::new(zone, nameservers)));
        }

        Ok(None)
    }
}
