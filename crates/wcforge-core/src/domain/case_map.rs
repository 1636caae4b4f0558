//! Dash-case ↔ camel-case conversion with memoization.
//!
//! Component names are dash-delimited on disk (`raml-request-panel`) but
//! camel-cased in generated source (`ramlRequestPanel` / `RamlRequestPanel`).
//! Both directions are pure and total over identifier-like strings; the cache
//! is a per-instance optimization, never a correctness requirement.

use std::collections::HashMap;

/// Separator used by dash-delimited component names.
pub const SEPARATOR: char = '-';

/// Memoizing case converter.
///
/// The cache is an instance field, so independent converters (e.g. in
/// parallel tests) never share state. It is append-only and unbounded, which
/// is acceptable: inputs are bounded by a single wizard run.
#[derive(Debug, Default)]
pub struct CaseMap {
    cache: HashMap<CacheKey, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    DashToCamel(String, bool),
    CamelToDash(String),
}

impl CaseMap {
    /// Create a converter with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace dashes with camel casing: `raml-request-panel` becomes
    /// `ramlRequestPanel`, or `RamlRequestPanel` when `upper_first` is set.
    ///
    /// Inputs without a separator are returned unchanged (modulo
    /// `upper_first`).
    pub fn dash_to_camel(&mut self, input: &str, upper_first: bool) -> String {
        let key = CacheKey::DashToCamel(input.to_string(), upper_first);
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }

        let mut result = if input.contains(SEPARATOR) {
            let mut out = String::with_capacity(input.len());
            let mut chars = input.chars().peekable();
            while let Some(c) = chars.next() {
                // A separator followed by a lowercase letter is collapsed
                // into that letter, upper-cased. Any other separator stays.
                match chars.peek() {
                    Some(&next) if c == SEPARATOR && next.is_ascii_lowercase() => {
                        chars.next();
                        out.push(next.to_ascii_uppercase());
                    }
                    _ => out.push(c),
                }
            }
            out
        } else {
            input.to_string()
        };

        if upper_first {
            if let Some(first) = result.chars().next() {
                let upper = first.to_ascii_uppercase();
                result.replace_range(..first.len_utf8(), &upper.to_string());
            }
        }

        self.cache.insert(key, result.clone());
        result
    }

    /// Replace camel casing with dashes and lower-case the whole string:
    /// `ramlRequestPanel` becomes `raml-request-panel`.
    pub fn camel_to_dash(&mut self, input: &str) -> String {
        let key = CacheKey::CamelToDash(input.to_string());
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }

        let mut result = String::with_capacity(input.len() + 4);
        for c in input.chars() {
            if c.is_ascii_uppercase() {
                result.push(SEPARATOR);
                result.push(c.to_ascii_lowercase());
            } else {
                result.push(c);
            }
        }

        self.cache.insert(key, result.clone());
        result
    }

    /// Number of memoized entries (testing helper).
    #[cfg(test)]
    fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── dash_to_camel ─────────────────────────────────────────────────────

    #[test]
    fn dash_to_camel_basic() {
        let mut cm = CaseMap::new();
        assert_eq!(cm.dash_to_camel("raml-request-panel", false), "ramlRequestPanel");
    }

    #[test]
    fn dash_to_camel_upper_first() {
        let mut cm = CaseMap::new();
        assert_eq!(cm.dash_to_camel("raml-request-panel", true), "RamlRequestPanel");
    }

    #[test]
    fn no_separator_is_unchanged() {
        let mut cm = CaseMap::new();
        assert_eq!(cm.dash_to_camel("noseparator", false), "noseparator");
        assert_eq!(cm.dash_to_camel("noseparator", true), "Noseparator");
    }

    #[test]
    fn separator_not_followed_by_lowercase_is_kept() {
        let mut cm = CaseMap::new();
        // Digit after the dash: not a dash-to-camel site.
        assert_eq!(cm.dash_to_camel("x-2y", false), "x-2y");
        // Trailing dash stays.
        assert_eq!(cm.dash_to_camel("panel-", false), "panel-");
    }

    // ── camel_to_dash ─────────────────────────────────────────────────────

    #[test]
    fn camel_to_dash_basic() {
        let mut cm = CaseMap::new();
        assert_eq!(cm.camel_to_dash("ramlRequestPanel"), "raml-request-panel");
    }

    #[test]
    fn camel_to_dash_lowercase_input_is_unchanged() {
        let mut cm = CaseMap::new();
        assert_eq!(cm.camel_to_dash("plain"), "plain");
    }

    // ── round trip ────────────────────────────────────────────────────────

    #[test]
    fn round_trip_law() {
        let mut cm = CaseMap::new();
        for s in ["raml-request-panel", "paper-button", "a-b-c", "single"] {
            let camel = cm.dash_to_camel(s, false);
            assert_eq!(cm.camel_to_dash(&camel), *s, "round trip failed for {s}");
        }
    }

    // ── cache behavior ────────────────────────────────────────────────────

    #[test]
    fn cache_keys_distinguish_upper_first() {
        let mut cm = CaseMap::new();
        let lower = cm.dash_to_camel("my-el", false);
        let upper = cm.dash_to_camel("my-el", true);
        assert_ne!(lower, upper);
        assert_eq!(cm.cached_entries(), 2);
    }

    #[test]
    fn repeated_calls_hit_the_cache() {
        let mut cm = CaseMap::new();
        cm.dash_to_camel("my-el", false);
        cm.dash_to_camel("my-el", false);
        cm.camel_to_dash("myEl");
        cm.camel_to_dash("myEl");
        assert_eq!(cm.cached_entries(), 2);
    }
}
