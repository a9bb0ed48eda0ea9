use std::slice;

use tracing::debug;

use crate::domain::Domain;
use crate::types::{QueryResult, Verdict};

/// Forbidden-domain index.
///
/// Holds the minimal covering set of the forbidden domains it was built from,
/// sorted by canonical form. No retained domain is a subdomain of another, so
/// the only possible ancestor of a query is its closest predecessor in the
/// index and each lookup is a single binary search.
///
/// Immutable once built; safe to query from many threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainChecker {
    forbidden: Vec<Domain>,
}

impl DomainChecker {
    /// Build a checker from forbidden domains in any order.
    ///
    /// Duplicates and domains already covered by an ancestor in the input are
    /// dropped.
    pub fn new<I>(domains: I) -> Self
    where
        I: IntoIterator<Item = Domain>,
    {
        let mut forbidden: Vec<Domain> = domains.into_iter().collect();
        let input_len = forbidden.len();

        // Ancestors sort before their descendants, so comparing against the
        // last retained entry is enough to collapse whole chains.
        forbidden.sort_unstable();
        forbidden.dedup_by(|next, retained| next.is_subdomain(retained));
        forbidden.shrink_to_fit();

        debug!(
            input = input_len,
            retained = forbidden.len(),
            "built forbidden domain index"
        );

        Self { forbidden }
    }

    /// Check if `domain` is forbidden or a subdomain of a forbidden domain
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        // First entry strictly greater than the query.
        let upper = self.forbidden.partition_point(|candidate| candidate <= domain);
        if upper == 0 {
            return false;
        }
        domain.is_subdomain(&self.forbidden[upper - 1])
    }

    /// Verdict for a single domain
    pub fn check(&self, domain: &Domain) -> Verdict {
        Verdict::from(self.is_forbidden(domain))
    }

    /// Verdicts for a batch of domains, in input order
    pub fn check_all<I>(&self, domains: I) -> Vec<QueryResult>
    where
        I: IntoIterator<Item = Domain>,
    {
        domains
            .into_iter()
            .map(|domain| {
                let verdict = self.check(&domain);
                QueryResult { domain, verdict }
            })
            .collect()
    }

    /// Number of retained forbidden domains
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    /// Check if the checker forbids nothing
    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }

    /// Retained forbidden domains in canonical order
    pub fn iter(&self) -> slice::Iter<'_, Domain> {
        self.forbidden.iter()
    }
}

impl FromIterator<Domain> for DomainChecker {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a DomainChecker {
    type Item = &'a Domain;
    type IntoIter = slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
