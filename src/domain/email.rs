//! Email address rule.

use super::text::trim_form;
use super::{FieldKind, FieldRule};
use once_cell::sync::Lazy;
use regex::Regex;

/// Class body matching the same characters as
/// [`is_form_whitespace`](super::text::is_form_whitespace).
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Email field rule.
///
/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and at least
/// one `.` with text on both sides somewhere after the `@`. Emptiness is
/// judged on the trimmed value, the pattern on the value as typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailRule;

impl EmailRule {
    pub const EMPTY_MESSAGE: &'static str = "Please enter your email";
    pub const FORMAT_MESSAGE: &'static str = "Please enter a valid email";

    /// Returns the compiled `local@domain.tld` pattern.
    pub fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            let part = format!("[^{}@]+", WHITESPACE_CLASS);
            Regex::new(&format!("^{part}@{part}\\.{part}$")).expect("Valid email regex")
        });
        &PATTERN
    }

    /// Returns true if `value` matches the pattern as typed.
    pub fn is_well_formed(value: &str) -> bool {
        Self::regex().is_match(value)
    }
}

impl FieldRule for EmailRule {
    fn kind(&self) -> FieldKind {
        FieldKind::Email
    }

    fn check(&self, value: &str) -> Result<(), &'static str> {
        if trim_form(value).is_empty() {
            Err(Self::EMPTY_MESSAGE)
        } else if !Self::is_well_formed(value) {
            Err(Self::FORMAT_MESSAGE)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(EmailRule.check("a@b.co").is_ok());
        assert!(EmailRule.check("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_malformed() {
        for value in ["a@b", "@b.co", "a@.co", "a@b.", "a@@b.co", "a b@c.de", "plain"] {
            assert_eq!(
                EmailRule.check(value),
                Err(EmailRule::FORMAT_MESSAGE),
                "{} should be malformed",
                value
            );
        }
    }

    #[test]
    fn test_email_empty_message_is_distinct() {
        assert_eq!(EmailRule.check(""), Err(EmailRule::EMPTY_MESSAGE));
        assert_eq!(EmailRule.check("  "), Err(EmailRule::EMPTY_MESSAGE));
        assert_ne!(EmailRule::EMPTY_MESSAGE, EmailRule::FORMAT_MESSAGE);
    }

    #[test]
    fn test_browser_whitespace_set() {
        // NEL is not whitespace to a browser, the byte order mark is.
        assert!(EmailRule.check("a@b.co\u{85}").is_ok());
        assert_eq!(
            EmailRule.check("a@b.co\u{FEFF}"),
            Err(EmailRule::FORMAT_MESSAGE)
        );
        assert_eq!(
            EmailRule.check("a@b\u{2003}c.co"),
            Err(EmailRule::FORMAT_MESSAGE)
        );
        assert_eq!(EmailRule.check("\u{FEFF}"), Err(EmailRule::EMPTY_MESSAGE));
    }

    #[test]
    fn test_surrounding_whitespace_is_malformed() {
        assert_eq!(EmailRule.check(" a@b.co"), Err(EmailRule::FORMAT_MESSAGE));
    }
}
