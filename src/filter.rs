//! Candidate filtering module
//!
//! Validates generated candidates against the domain-name grammar before
//! they enter the deduplication set.

use regex::Regex;

/// Grammar for an acceptable candidate: one or more labels of lowercase
/// letters, digits, and hyphens (no leading/trailing hyphen in a label),
/// dot-separated, ending in an alphabetic label of at least two characters.
const DOMAIN_GRAMMAR: &str = r"^(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}$";

/// Syntactic domain-name filter.
///
/// Purely syntactic: it never checks registrability or resolvability, and it
/// never normalizes case. Input must already be lowercase to pass.
#[derive(Debug, Clone)]
pub struct DomainFilter {
    grammar: Regex,
}

impl DomainFilter {
    pub fn new() -> Self {
        // The grammar is a fixed literal; compilation cannot fail.
        let grammar = Regex::new(DOMAIN_GRAMMAR).expect("domain grammar compiles");
        Self { grammar }
    }

    /// Check whether a candidate matches the domain-name grammar end-to-end.
    #[inline]
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.grammar.is_match(candidate)
    }
}

impl Default for DomainFilter {
    fn default() -> Self {
        Self::new()
    }
}
