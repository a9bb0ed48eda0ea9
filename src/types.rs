use std::fmt;

use serde::Serialize;

use crate::domain::Domain;

/// Verdict for a single queried domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    /// Domain is forbidden or a subdomain of a forbidden domain
    Bad,
    /// Domain is not covered by the forbidden set
    Good,
}

impl Verdict {
    /// Literal output token for this verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Bad => "Bad",
            Verdict::Good => "Good",
        }
    }

    /// Check if this verdict marks the domain as forbidden
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Verdict::Bad)
    }
}

impl From<bool> for Verdict {
    fn from(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query result from the domain checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// The queried domain
    pub domain: Domain,
    /// Verdict for the domain
    pub verdict: Verdict,
}
