use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label separator, also appended to the canonical form as a boundary sentinel.
pub const SEPARATOR: char = '.';

/// A domain name stored in canonical (reversed) orientation.
///
/// The canonical form is the raw name reversed character by character with a
/// trailing [`SEPARATOR`]: `"foo.bar.com"` becomes `"moc.rab.oof."`. In this
/// form "is ancestor-or-self of" is a plain prefix test, and the sentinel keeps
/// the test on a label boundary (`"moc."` is not a prefix of `"tsacmoc."`).
///
/// Ordering, equality and hashing all follow the canonical form, byte for byte.
/// No case folding or validation is applied; any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Domain {
    canonical: String,
}

impl Domain {
    /// Create a domain from its raw dot-separated form.
    pub fn new(name: &str) -> Self {
        let mut canonical = String::with_capacity(name.len() + 1);
        canonical.extend(name.chars().rev());
        canonical.push(SEPARATOR);
        Self { canonical }
    }

    /// Canonical form: reversed name followed by the separator sentinel.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Raw form, as it was given to [`Domain::new`].
    pub fn name(&self) -> String {
        self.reversed_name().chars().rev().collect()
    }

    /// Returns true if `self` is `other` or one of its descendants.
    ///
    /// Reflexive and transitive, not symmetric.
    pub fn is_subdomain(&self, other: &Domain) -> bool {
        self.canonical.as_bytes().starts_with(other.canonical.as_bytes())
    }

    fn reversed_name(&self) -> &str {
        // The sentinel is always the last char.
        &self.canonical[..self.canonical.len() - SEPARATOR.len_utf8()]
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name())
    }
}

impl From<&str> for Domain {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.name()
    }
}

impl FromStr for Domain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        assert_eq!(Domain::new("foo.bar.com").canonical(), "moc.rab.oof.");
        assert_eq!(Domain::new("com").canonical(), "moc.");
        assert_eq!(Domain::new("").canonical(), ".");
    }

    #[test]
    fn test_canonical_always_ends_with_separator() {
        for name in ["", "a", "a.b", "mail.example.com", "trailing.", ".leading"] {
            assert!(Domain::new(name).canonical().ends_with(SEPARATOR), "{name}");
        }
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(Domain::new("mail.example.com").name(), "mail.example.com");
        assert_eq!(Domain::new("").name(), "");
        assert_eq!(Domain::new("mail.example.com").to_string(), "mail.example.com");
    }

    #[test]
    fn test_non_ascii_name_survives() {
        let domain = Domain::new("пример.рф");
        assert_eq!(domain.name(), "пример.рф");
        assert!(Domain::new("www.пример.рф").is_subdomain(&domain));
    }

    #[test]
    fn test_subdomain_reflexive() {
        let domain = Domain::new("ya.ru");
        assert!(domain.is_subdomain(&domain));
    }

    #[test]
    fn test_subdomain_not_symmetric() {
        let parent = Domain::new("a.b");
        let child = Domain::new("x.a.b");
        assert!(child.is_subdomain(&parent));
        assert!(!parent.is_subdomain(&child));
    }

    #[test]
    fn test_subdomain_respects_label_boundary() {
        assert!(!Domain::new("comcast").is_subdomain(&Domain::new("com")));
        assert!(!Domain::new("aaa.com").is_subdomain(&Domain::new("aaa")));
        assert!(!Domain::new("notexample.com").is_subdomain(&Domain::new("example.com")));
        assert!(Domain::new("comcast.com").is_subdomain(&Domain::new("com")));
    }

    #[test]
    fn test_deep_subdomain() {
        let root = Domain::new("aaa");
        assert!(Domain::new("aaa.aaa.aaa").is_subdomain(&root));
        assert!(!root.is_subdomain(&Domain::new("aaa.aaa.aaa")));
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_eq!(Domain::new("ya.ru"), Domain::from("ya.ru"));
        assert_ne!(Domain::new("ya.ru"), Domain::new("YA.ru"));
    }

    #[test]
    fn test_ancestor_sorts_before_descendant() {
        let mut domains = vec![
            Domain::new("x.a.b"),
            Domain::new("a.b"),
            Domain::new("y.x.a.b"),
            Domain::new("ba.b"),
        ];
        domains.sort();
        let position = |name: &str| domains.iter().position(|d| d.name() == name).unwrap();
        assert!(position("a.b") < position("x.a.b"));
        assert!(position("x.a.b") < position("y.x.a.b"));
    }

    #[test]
    fn test_from_str() {
        let domain: Domain = "maps.me".parse().unwrap();
        assert_eq!(domain, Domain::new("maps.me"));
    }

    #[test]
    fn test_serde_uses_raw_name() {
        let json = serde_json::to_string(&Domain::new("m.ya.ru")).unwrap();
        assert_eq!(json, "\"m.ya.ru\"");

        let domain: Domain = serde_json::from_str("\"m.ya.ru\"").unwrap();
        assert_eq!(domain, Domain::new("m.ya.ru"));
    }
}
