//! Domain Checker - forbidden-domain lookup with subdomain coverage
//!
//! Given a list of forbidden domains, answers whether a queried domain is
//! itself forbidden or a subdomain of a forbidden one:
//! - Domains are stored reversed with a trailing separator, so ancestor-of
//!   becomes a prefix test on a label boundary
//! - The forbidden list is sorted and reduced to its minimal covering set
//! - Each query is one binary search plus one prefix comparison
//!
//! # Example
//!
//! ```rust
//! use domain_checker::{build_checker, query};
//!
//! let checker = build_checker(["ya.ru", "maps.me", "m.ya.ru", "com"]);
//!
//! assert!(query(&checker, "moscow.m.ya.ru"));
//! assert!(query(&checker, "maps.com"));      // covered by "com"
//! assert!(!query(&checker, "maps.ru"));
//! assert_eq!(checker.len(), 3);              // "m.ya.ru" is covered by "ya.ru"
//! ```
//!
//! # Input Format
//!
//! The binary reads a count followed by that many forbidden domains, then a
//! count followed by that many query domains, one per line, and prints one
//! `Bad`/`Good` verdict per query:
//!
//! ```text
//! 2
//! aaa.aaa
//! aaa
//! 1
//! x.aaa.aaa
//! ```
//!
//! Domains are compared byte for byte: no case folding, IDNA, or wildcard
//! syntax.

pub mod checker;
pub mod domain;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use checker::DomainChecker;
pub use domain::{Domain, SEPARATOR};
pub use error::{CheckerError, Result};
pub use output::{write_results, OutputFormat};
pub use parser::{read_input, read_input_from_file, Input, InputReader};
pub use types::{QueryResult, Verdict};

/// Build a checker from raw forbidden domain strings.
pub fn build_checker<I>(forbidden: I) -> DomainChecker
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    forbidden
        .into_iter()
        .map(|name| Domain::new(name.as_ref()))
        .collect()
}

/// Check a raw domain string against a checker. Returns true if forbidden.
pub fn query(checker: &DomainChecker, domain: &str) -> bool {
    checker.is_forbidden(&Domain::new(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let text = "\
4
ya.ru
maps.me
m.ya.ru
com
5
ya.ru
ya.com
m.maps.me
moscow.m.ya.ru
maps.com
";

        // Parse input
        let input = read_input(text.as_bytes()).unwrap();
        assert_eq!(input.forbidden.len(), 4);
        assert_eq!(input.queries.len(), 5);

        // Build checker
        let checker = DomainChecker::new(input.forbidden);
        assert_eq!(checker.len(), 3);

        // Check queries and render verdicts
        let results = checker.check_all(input.queries);
        let mut out: Vec<u8> = Vec::new();
        write_results(&mut out, &results, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Bad\nBad\nBad\nBad\nBad\n");
    }

    #[test]
    fn test_build_checker_accepts_owned_strings() {
        let forbidden = vec!["aaa.aaa".to_string(), "aaa".to_string()];
        let checker = build_checker(&forbidden);
        assert_eq!(checker.len(), 1);
        assert!(query(&checker, "x.aaa.aaa"));
        assert!(!query(&checker, "aaa.com"));
    }
}
