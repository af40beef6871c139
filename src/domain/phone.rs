//! Phone number mask.
//!
//! This module encapsulates the national numbering convention used by the
//! contact form: a 2-digit area code followed by an 8-digit landline or a
//! 9-digit mobile number. Raw text is reduced to a [`DigitString`] and then
//! rendered progressively while the user types:
//!
//! - `(11`
//! - `(11) 9123`
//! - `(11) 2345-6789`
//! - `(11) 91234-5678`

use super::{FieldKind, FieldRule};
use std::fmt;

/// Maximum number of digits kept from any input.
pub const MAX_DIGITS: usize = 11;

/// Digit counts accepted by phone validation.
pub const VALID_LENGTHS: [usize; 2] = [10, 11];

/// Non-character keys the phone field lets through.
const NAVIGATION_KEYS: [&str; 7] = [
    "Backspace",
    "Delete",
    "ArrowLeft",
    "ArrowRight",
    "Tab",
    "Home",
    "End",
];

/// Sanitized phone digits, at most [`MAX_DIGITS`] long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DigitString(String);

impl DigitString {
    /// Returns the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits, at most [`MAX_DIGITS`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the input held no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display form of a [`DigitString`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedPhone(String);

impl FormattedPhone {
    /// Returns the display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Strips the punctuation back off.
    pub fn digits(&self) -> DigitString {
        PhoneMask::sanitize(&self.0)
    }
}

impl fmt::Display for FormattedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Live input mask for the phone field.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneMask;

impl PhoneMask {
    /// Keeps the ASCII digits of `input`, truncated to [`MAX_DIGITS`].
    pub fn sanitize(input: &str) -> DigitString {
        DigitString(
            input
                .chars()
                .filter(char::is_ascii_digit)
                .take(MAX_DIGITS)
                .collect(),
        )
    }

    /// Renders digits using the bracket for their count.
    ///
    /// # Rules
    /// - 0-2 digits: `(D` with no closing paren yet
    /// - 3-6 digits: `(DD) D...`
    /// - 7-10 digits: `(DD) DDDD-D...` (landline)
    /// - 11 digits: `(DD) DDDDD-DDDD` (mobile)
    pub fn format(digits: &DigitString) -> FormattedPhone {
        // Digits are ASCII, so byte slicing lands on char boundaries.
        let d = digits.as_str();
        let formatted = match d.len() {
            0..=2 => format!("({}", d),
            3..=6 => format!("({}) {}", &d[..2], &d[2..]),
            7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
            _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        };
        FormattedPhone(formatted)
    }

    /// Sanitizes then formats arbitrary field text.
    pub fn format_phone(raw: &str) -> FormattedPhone {
        Self::format(&Self::sanitize(raw))
    }

    /// Shifts the caret by the length change the mask introduced.
    ///
    /// This assumes the whole delta happened at the caret, so edits next to
    /// the mask punctuation can leave the caret one or two places off.
    pub fn adjust_caret(old_caret: usize, length_delta: isize) -> usize {
        old_caret.saturating_add_signed(length_delta)
    }

    /// Returns true if a keydown with this key identifier may reach the field.
    pub fn is_allowed_key(key: &str) -> bool {
        if NAVIGATION_KEYS.contains(&key) {
            return true;
        }
        let mut chars = key.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
    }
}

/// Validation rule for the phone field.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneRule;

impl PhoneRule {
    /// Shown when the field holds no digits.
    pub const EMPTY_MESSAGE: &'static str = "Please enter your phone number";
    /// Shown for any digit count other than 10 or 11.
    pub const LENGTH_MESSAGE: &'static str = "Phone number must have 10 or 11 digits";
}

impl FieldRule for PhoneRule {
    fn kind(&self) -> FieldKind {
        FieldKind::Phone
    }

    fn check(&self, value: &str) -> Result<(), &'static str> {
        // Counted without truncation: a 12-digit value must fail.
        let count = value.chars().filter(char::is_ascii_digit).count();
        if count == 0 {
            Err(Self::EMPTY_MESSAGE)
        } else if !VALID_LENGTHS.contains(&count) {
            Err(Self::LENGTH_MESSAGE)
        } else {
            Ok(())
        }
    }
}
