//! Email format validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::EMAIL_PATTERN;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Check whether `email` fully matches `localpart@domain.tld`.
///
/// The local part is letters and digits, optionally split by single `.`,
/// `-` or `_` separators. Domain labels are alphanumeric with hyphens and
/// the address must end in one or more `.tld` groups of two or more letters.
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_emails() {
        for email in [
            "a@b.com",
            "user@example.com",
            "first.last@example.co.uk",
            "first-last@sub-domain.org",
            "first_last99@example.io",
            "UPPER@EXAMPLE.COM",
        ] {
            assert!(is_email_valid(email), "expected {email} to be valid");
        }
    }

    #[test]
    fn test_rejects_missing_at_sign() {
        assert!(!is_email_valid("user.example.com"));
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(!is_email_valid("user@example"));
        assert!(!is_email_valid("user@example."));
    }

    #[test]
    fn test_rejects_short_tld() {
        assert!(!is_email_valid("user@example.c"));
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert!(!is_email_valid("us er@example.com"));
        assert!(!is_email_valid("user!@example.com"));
        assert!(!is_email_valid("user@exa_mple.com"));
        assert!(!is_email_valid("user@example.c0m"));
    }

    #[test]
    fn test_rejects_misplaced_separators() {
        assert!(!is_email_valid(".user@example.com"));
        assert!(!is_email_valid("user.@example.com"));
        assert!(!is_email_valid("us..er@example.com"));
    }

    #[test]
    fn test_requires_full_match() {
        assert!(!is_email_valid("user@example.com "));
        assert!(!is_email_valid(" user@example.com"));
        assert!(!is_email_valid("user@example.com\n"));
        assert!(!is_email_valid("a@b@example.com"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_email_valid(""));
    }
}
