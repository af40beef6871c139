//! Free-text and selection rules.

use super::{FieldKind, FieldRule};

/// Characters browsers treat as whitespace in `trim()` and regex `\s`.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Trims [`is_form_whitespace`] characters from both ends.
pub fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// A text field that must be filled in and reach a minimum length.
///
/// Both checks run on the value trimmed by [`trim_form`] and count
/// characters, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct RequiredTextRule {
    kind: FieldKind,
    min_chars: usize,
    empty_message: &'static str,
    short_message: &'static str,
}

impl RequiredTextRule {
    /// Name field: at least 3 characters.
    pub const NAME: Self = Self {
        kind: FieldKind::Name,
        min_chars: 3,
        empty_message: "Please enter your name",
        short_message: "Name must be at least 3 characters",
    };

    /// Message field: at least 10 characters.
    pub const MESSAGE: Self = Self {
        kind: FieldKind::Message,
        min_chars: 10,
        empty_message: "Please enter your message",
        short_message: "Message must be at least 10 characters",
    };

    /// Message shown when the trimmed value is empty.
    pub fn empty_message(&self) -> &'static str {
        self.empty_message
    }

    /// Message shown when the trimmed value is too short.
    pub fn short_message(&self) -> &'static str {
        self.short_message
    }
}

impl FieldRule for RequiredTextRule {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn check(&self, value: &str) -> Result<(), &'static str> {
        let trimmed = trim_form(value);
        if trimmed.is_empty() {
            Err(self.empty_message)
        } else if trimmed.chars().count() < self.min_chars {
            Err(self.short_message)
        } else {
            Ok(())
        }
    }
}

/// Subject selector: any non-empty option value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectRule;

impl SubjectRule {
    pub const EMPTY_MESSAGE: &'static str = "Please select a subject";
}

impl FieldRule for SubjectRule {
    fn kind(&self) -> FieldKind {
        FieldKind::Subject
    }

    fn check(&self, value: &str) -> Result<(), &'static str> {
        // Not trimmed: option values are exact.
        if value.is_empty() {
            Err(Self::EMPTY_MESSAGE)
        } else {
            Ok(())
        }
    }
}
