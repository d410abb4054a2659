//! Line classification module
//!
//! Splits raw dump lines into account lines, password lines, or noise based
//! on configured marker prefixes.

/// Result of classifying one raw line.
#[derive(Debug, PartialEq, Eq)]
pub enum Classified<'a> {
    /// Line contained the account prefix; value is the trimmed remainder.
    Account(&'a str),
    /// Line contained the password prefix; value is the trimmed remainder.
    Password(&'a str),
    /// Line matched no configured prefix. Silently ignored by the engine.
    Skip,
}

/// Classifier over one or two configured prefixes.
///
/// Matching is substring containment, NOT anchored to the line start: a
/// prefix token occurring anywhere in the line matches, and the extracted
/// value is everything after its first occurrence, whitespace-trimmed.
/// Dump lines carry indentation and tool-added decoration before the
/// marker, so anchoring at column zero would silently drop records.
#[derive(Debug, Clone)]
pub struct Classifier {
    password_prefix: String,
    account_prefix: Option<String>,
}

impl Classifier {
    /// Password-only classifier. Never tests for an account prefix.
    pub fn passwords_only(password_prefix: &str) -> Self {
        Self {
            password_prefix: password_prefix.to_string(),
            account_prefix: None,
        }
    }

    /// Combo classifier. The account prefix takes branch priority: a line
    /// containing both prefixes is an account line.
    pub fn with_accounts(account_prefix: &str, password_prefix: &str) -> Self {
        Self {
            password_prefix: password_prefix.to_string(),
            account_prefix: Some(account_prefix.to_string()),
        }
    }

    /// Classify a single raw line.
    #[inline]
    pub fn classify<'a>(&self, line: &'a str) -> Classified<'a> {
        if let Some(ref account_prefix) = self.account_prefix {
            if let Some(value) = split_after_first(line, account_prefix) {
                return Classified::Account(value);
            }
        }

        if let Some(value) = split_after_first(line, &self.password_prefix) {
            return Classified::Password(value);
        }

        Classified::Skip
    }
}

/// Return the trimmed remainder after the first occurrence of `prefix`
/// in `line`, or `None` if the prefix does not occur.
#[inline]
fn split_after_first<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.find(prefix)
        .map(|idx| line[idx + prefix.len()..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_line_extraction() {
        let classifier = Classifier::passwords_only("Item value:");

        assert_eq!(
            classifier.classify("Item value: hunter2"),
            Classified::Password("hunter2")
        );
        assert_eq!(
            classifier.classify("no marker here"),
            Classified::Skip
        );
    }

    #[test]
    fn test_containment_not_anchored() {
        let classifier = Classifier::passwords_only("Item value:");

        // Prefix mid-line still matches; value starts after it
        assert_eq!(
            classifier.classify("  [record 3] Item value:  secret  "),
            Classified::Password("secret")
        );
    }

    #[test]
    fn test_split_on_first_occurrence() {
        let classifier = Classifier::passwords_only("Item value:");

        // Second occurrence of the prefix stays inside the value
        assert_eq!(
            classifier.classify("Item value: Item value: nested"),
            Classified::Password("Item value: nested")
        );
    }

    #[test]
    fn test_account_priority_over_password() {
        let classifier = Classifier::with_accounts("Account:", "Item value:");

        // Both prefixes present: account wins, password branch never runs
        assert_eq!(
            classifier.classify("Account: a@b.com Item value: x"),
            Classified::Account("a@b.com Item value: x")
        );
    }

    #[test]
    fn test_password_only_mode_ignores_account_lines() {
        let classifier = Classifier::passwords_only("Item value:");

        assert_eq!(classifier.classify("Account: a@b.com"), Classified::Skip);
    }

    #[test]
    fn test_combo_mode_classifies_both() {
        let classifier = Classifier::with_accounts("Account:", "Item value:");

        assert_eq!(
            classifier.classify("Account: a@b.com"),
            Classified::Account("a@b.com")
        );
        assert_eq!(
            classifier.classify("Item value: pw"),
            Classified::Password("pw")
        );
        assert_eq!(classifier.classify("junk"), Classified::Skip);
    }

    #[test]
    fn test_empty_value_after_prefix() {
        let classifier = Classifier::passwords_only("Item value:");

        assert_eq!(
            classifier.classify("Item value:   "),
            Classified::Password("")
        );
    }
}
