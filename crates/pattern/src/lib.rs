mod error;

use regex::Regex;

pub use error::{Error, Result};

/// Compiled pattern used to test and extract substrings of text.
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compiles `pattern`, panicking if it is not a valid pattern.
    ///
    /// Use [`Matcher::try_new`] for untrusted input.
    pub fn new(pattern: &str) -> Self {
        match Self::try_new(pattern) {
            Ok(matcher) => matcher,
            Err(err) => panic!("{err}: {}", source_message(&err)),
        }
    }

    pub fn try_new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn first_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }

    /// Non-overlapping matches, left to right.
    pub fn all_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }
}

fn source_message(err: &Error) -> String {
    match err {
        Error::InvalidPattern { source, .. } => source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn matches_anywhere() {
        let m = Matcher::new(r"\d+");
        assert!(m.is_match("abc 42 def"));
        assert!(!m.is_match("no digits"));
    }

    #[test]
    fn first_match_is_leftmost() {
        let m = Matcher::new(r"\d+");
        assert_eq!(m.first_match("a1b22c333"), Some("1"));
        assert_eq!(m.first_match("none"), None);
    }

    #[test]
    fn all_matches_are_ordered_and_disjoint() {
        let m = Matcher::new("aa");
        assert_eq!(m.all_matches("aaaaa"), vec!["aa", "aa"]);

        let words = Matcher::new(r"[a-z]+");
        assert_eq!(words.all_matches("one, two; three"), vec!["one", "two", "three"]);
        assert!(words.all_matches("123").is_empty());
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let m = Matcher::new("");
        assert_eq!(m.as_str(), "");
        assert!(m.is_match(""));
        assert!(m.is_match("anything"));
        assert_eq!(m.first_match("xyz"), Some(""));
    }

    #[test]
    fn checked_compile_reports_failure() {
        let err = Matcher::try_new("(unclosed").unwrap_err();
        match &err {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        }
        assert_eq!(err.to_string(), "invalid pattern \"(unclosed\"");
        assert!(err.source().is_some());
    }

    #[test]
    fn checked_compile_fallback() {
        let m = Matcher::try_new("[z-a]").unwrap_or_else(|_| Matcher::new(""));
        assert!(m.is_match("fallback"));
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn unchecked_compile_panics() {
        let _ = Matcher::new("(unclosed");
    }
}
