use super::DelegationResolver;
use crate::services::{extract_string_answer, AuthorityResult};
use dnsverify_domain::dns_name::normalize_name;
use dnsverify_domain::limits::MAX_CNAME_STEPS;
use dnsverify_domain::{
    AuthoritySource, DnsAnswerRecord, DnsQuery, RecordType, ResolveError, ResolveErrorCode,
    ResponseCode,
};
use tracing::{debug, instrument};

/// What ends a chain: a record of `record_type`, and for CNAME checks a
/// specific alias target.
#[derive(Debug, Clone, Copy)]
struct ChainTarget<'a> {
    record_type: RecordType,
    expected: Option<&'a str>,
}

impl ChainTarget<'_> {
    fn matches(&self, record: &DnsAnswerRecord) -> bool {
        record.record_type == self.record_type
            && self
                .expected
                .map_or(true, |expected| normalize_name(&record.data) == normalize_name(expected))
    }
}

/// `name`, then every alias reached from it through the CNAMEs in `answers`.
///
/// Records owned by anything else (glue, unrelated data) are never part of
/// the chain.
fn alias_chain(name: &str, answers: &[DnsAnswerRecord]) -> Vec<String> {
    let mut chain = vec![name.to_string()];
    while let Some(next) = chain.last().and_then(|owner| {
        answers
            .iter()
            .find(|record| {
                record.record_type == RecordType::CNAME && normalize_name(&record.name) == *owner
            })
            .map(|record| normalize_name(&record.data))
    }) {
        if chain.contains(&next) {
            break;
        }
        chain.push(next);
    }
    chain
}

impl DelegationResolver {
    /// First A record for `domain`, following CNAMEs at their authoritative servers.
    #[instrument(skip(self))]
    pub async fn query_a(&self, domain: &str) -> Result<DnsAnswerRecord, ResolveError> {
        let target = ChainTarget {
            record_type: RecordType::A,
            expected: None,
        };
        let result = self.follow_chain(domain, target).await;
        self.with_system_fallback(domain, target, result).await
    }

    /// First AAAA record for `domain`, following CNAMEs at their authoritative servers.
    #[instrument(skip(self))]
    pub async fn query_aaaa(&self, domain: &str) -> Result<DnsAnswerRecord, ResolveError> {
        let target = ChainTarget {
            record_type: RecordType::AAAA,
            expected: None,
        };
        let result = self.follow_chain(domain, target).await;
        self.with_system_fallback(domain, target, result).await
    }

    /// Confirms that `domain` aliases to `expected_target`, possibly through
    /// intermediate CNAMEs.
    #[instrument(skip(self))]
    pub async fn test_cname(
        &self,
        domain: &str,
        expected_target: &str,
    ) -> Result<DnsAnswerRecord, ResolveError> {
        let target = ChainTarget {
            record_type: RecordType::CNAME,
            expected: Some(expected_target),
        };
        let result = self.follow_chain(domain, target).await;
        self.with_system_fallback(domain, target, result).await
    }

    async fn follow_chain(
        &self,
        domain: &str,
        target: ChainTarget<'_>,
    ) -> Result<DnsAnswerRecord, ResolveError> {
        let mut current = normalize_name(domain);
        let mut visited = vec![current.clone()];
        let mut step = 0usize;

        loop {
            if step > MAX_CNAME_STEPS {
                return Err(ResolveError::max_cname_steps(&current, step));
            }

            let authority = self
                .find_authority(&current)
                .await?
                .filter(|authority| !authority.nameservers.is_empty())
                .ok_or_else(|| {
                    ResolveError::no_record(
                        &current,
                        format!("No authoritative nameservers found for {}", current),
                    )
                })?;

            let query = DnsQuery::iterative(current.as_str(), target.record_type);
            let response = self
                .failover
                .resolve_with_ns(&query, &authority.nameservers)
                .await
                .ok_or_else(|| {
                    ResolveError::no_record(
                        &current,
                        format!("No nameserver of {} answered for {}", authority.zone, current),
                    )
                })?;

            match response.packet.rcode {
                ResponseCode::NoError => {}
                ResponseCode::NXDomain => {
                    return Err(ResolveError::no_record(
                        &current,
                        format!("{} does not exist", current),
                    ));
                }
                rcode => return Err(ResolveError::server_rcode(&current, rcode, target.record_type)),
            }

            let answers = extract_string_answer(
                &response.packet.answers,
                &[RecordType::CNAME, target.record_type],
            );
            let owners = alias_chain(&current, &answers);

            let found = answers.iter().find(|record| {
                owners.contains(&normalize_name(&record.name)) && target.matches(record)
            });
            if let Some(found) = found {
                debug!(
                    domain = %domain,
                    record_type = %target.record_type,
                    data = %found.data,
                    steps = step,
                    answered_by = %response.ns.host,
                    "Chain resolved"
                );
                return Ok(found.clone());
            }

            let next = answers
                .iter()
                .find(|record| {
                    record.record_type == RecordType::CNAME && normalize_name(&record.name) == current
                })
                .map(|record| normalize_name(&record.data))
                .ok_or_else(|| {
                    ResolveError::no_record(
                        &current,
                        format!("No {} record found for {}", target.record_type, current),
                    )
                })?;

            if visited.contains(&next) {
                return Err(ResolveError::cname_loop(&next, visited));
            }

            debug!(from = %current, to = %next, step = step + 1, "Following CNAME");
            visited.push(next.clone());
            current = next;
            step += 1;
        }
    }

    async fn find_authority(&self, domain: &str) -> Result<Option<AuthorityResult>, ResolveError> {
        if self.lookup.authority == AuthoritySource::LocalFirst {
            if let Some(authority) = self.authoritative_ns_from_local(domain).await? {
                return Ok(Some(authority));
            }
            debug!(domain = %domain, "Local resolvers gave no authority, walking from the root");
        }
        self.authoritative_ns_from_root(domain).await
    }

    /// Replaces a `NO_RECORD` with what the OS resolvers say, when enabled.
    async fn with_system_fallback(
        &self,
        domain: &str,
        target: ChainTarget<'_>,
        result: Result<DnsAnswerRecord, ResolveError>,
    ) -> Result<DnsAnswerRecord, ResolveError> {
        let error = match result {
            Err(e) if e.code == ResolveErrorCode::NoRecord && self.lookup.system_fallback => e,
            other => return other,
        };

        let name = normalize_name(domain);
        let candidates: Vec<String> = match target.record_type {
            RecordType::A => self
                .system
                .resolve_ipv4(&name)
                .await
                .map(|addresses| addresses.iter().map(ToString::to_string).collect()),
            RecordType::AAAA => self
                .system
                .resolve_ipv6(&name)
                .await
                .map(|addresses| addresses.iter().map(ToString::to_string).collect()),
            _ => self.system.resolve_cname(&name).await,
        }
        .unwrap_or_default();

        let found = candidates
            .into_iter()
            .map(|data| DnsAnswerRecord::new(name.as_str(), target.record_type, 0, data))
            .find(|record| target.matches(record));

        match found {
            Some(record) => {
                debug!(domain = %name, record_type = %target.record_type, data = %record.data, "Answered by system resolver");
                Ok(record)
            }
            None => Err(error),
        }
    }
}
