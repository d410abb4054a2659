//! Value validation module
//!
//! Stateless predicates applied to extracted values before they reach the
//! output: length bounds, JSON-shape rejection, and a permissive email check.

use regex::Regex;

/// Permissive email shape: no whitespace or extra `@`, at least one `@`,
/// at least one `.` after it. Deliberately not RFC-5322.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Length-bounds and shape filter for password values.
#[derive(Debug, Clone)]
pub struct ValueFilter {
    min_length: usize,
    max_length: usize,
}

impl ValueFilter {
    /// Create a new filter. Bounds are inclusive; `min <= max` is required.
    pub fn new(min_length: usize, max_length: usize) -> anyhow::Result<Self> {
        if min_length > max_length {
            anyhow::bail!(
                "Invalid length bounds: min ({}) must be <= max ({})",
                min_length,
                max_length
            );
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    /// Check if a value is within the configured length bounds.
    ///
    /// Length is measured in characters, not bytes.
    #[inline]
    pub fn length_ok(&self, value: &str) -> bool {
        // Fast byte-length check for ASCII-only values
        let len = if value.is_ascii() {
            value.len()
        } else {
            value.chars().count()
        };
        len >= self.min_length && len <= self.max_length
    }

    /// Full acceptance check: length bounds plus JSON-shape rejection.
    #[inline]
    pub fn accepts(&self, value: &str) -> bool {
        self.length_ok(value) && !looks_structured(value)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

/// Check if a value looks like a JSON object or array fragment.
///
/// This is a prefix heuristic, not a parser: anything starting with `{"` or
/// `[` is rejected regardless of what follows. Dump exports interleave raw
/// item values with serialized blobs, and a naive prefix match would
/// otherwise capture those blobs as passwords.
#[inline]
pub fn looks_structured(value: &str) -> bool {
    value.starts_with("{\"") || value.starts_with('[')
}

/// Compiled email-shape matcher.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
}

impl EmailValidator {
    pub fn new() -> anyhow::Result<Self> {
        let pattern = Regex::new(EMAIL_PATTERN)
            .map_err(|e| anyhow::anyhow!("Invalid email pattern '{}': {}", EMAIL_PATTERN, e))?;
        Ok(Self { pattern })
    }

    #[inline]
    pub fn is_email(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds_inclusive() {
        let filter = ValueFilter::new(4, 8).unwrap();

        assert!(!filter.length_ok("abc")); // 3 chars
        assert!(filter.length_ok("abcd")); // 4 chars, lower bound
        assert!(filter.length_ok("abcdefgh")); // 8 chars, upper bound
        assert!(!filter.length_ok("abcdefghi")); // 9 chars
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let filter = ValueFilter::new(4, 4).unwrap();

        assert!(filter.length_ok("hëll")); // 4 chars, 5 bytes
        assert!(filter.length_ok("hell"));
        assert!(!filter.length_ok("hëllo"));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert!(ValueFilter::new(10, 4).is_err());
        assert!(ValueFilter::new(4, 4).is_ok());
    }

    #[test]
    fn test_looks_structured() {
        assert!(looks_structured("{\"key\": \"value\"}"));
        assert!(looks_structured("[1, 2, 3]"));
        assert!(looks_structured("[anything at all"));
        assert!(!looks_structured("{plain brace is fine"));
        assert!(!looks_structured("password123"));
        assert!(!looks_structured(""));
    }

    #[test]
    fn test_accepts_combines_checks() {
        let filter = ValueFilter::new(4, 64).unwrap();

        assert!(filter.accepts("hunter2!"));
        assert!(!filter.accepts("ab")); // too short
        assert!(!filter.accepts("{\"json\": true}")); // structured
        assert!(!filter.accepts("[0000]")); // structured
    }

    #[test]
    fn test_email_validator() {
        let email = EmailValidator::new().unwrap();

        assert!(email.is_email("a@b.com"));
        assert!(email.is_email("first.last@sub.example.org"));
        assert!(!email.is_email("notanemail"));
        assert!(!email.is_email("no@tld"));
        assert!(!email.is_email("two@@example.com"));
        assert!(!email.is_email("spaced out@example.com"));
        assert!(!email.is_email(""));
    }
}
