//! Field kinds and per-pass validation state.

use super::{EmailRule, FieldRule, PhoneRule, RequiredTextRule, SubjectRule};
use crate::error::{FormError, FormResult};
use std::fmt;
use std::str::FromStr;

/// The semantic role of a contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Message,
    Phone,
}

/// Event that triggers live validation of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Every edit of the text.
    Input,
    /// Committed selection changes.
    Change,
}

static EMAIL: EmailRule = EmailRule;
static PHONE: PhoneRule = PhoneRule;
static SUBJECT: SubjectRule = SubjectRule;

impl FieldKind {
    /// Every kind, in form order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Subject,
        FieldKind::Message,
        FieldKind::Phone,
    ];

    /// Element identifiers this kind answers to, in lookup order.
    pub fn ids(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["name"],
            Self::Email => &["email"],
            Self::Subject => &["subject"],
            Self::Message => &["message"],
            Self::Phone => &["phone", "telefone"],
        }
    }

    /// Resolves an element identifier to its kind.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.ids().contains(&id))
    }

    /// Checks that `id` names an element the phone field may use.
    ///
    /// # Errors
    /// Returns `FormError::InvalidInput` for any other identifier.
    pub fn phone_id(id: &str) -> FormResult<&'static str> {
        Self::Phone
            .ids()
            .iter()
            .copied()
            .find(|candidate| *candidate == id)
            .ok_or_else(|| FormError::InvalidInput {
                parameter: "phone-id".to_string(),
                reason: format!(
                    "'{}' is not a phone field id (expected one of: {})",
                    id,
                    Self::Phone.ids().join(", ")
                ),
            })
    }

    /// Event that revalidates this kind while the user edits it.
    pub fn trigger(self) -> Trigger {
        match self {
            Self::Subject => Trigger::Change,
            _ => Trigger::Input,
        }
    }

    /// Validation rule applied to this kind.
    pub fn rule(self) -> &'static dyn FieldRule {
        match self {
            Self::Name => &RequiredTextRule::NAME,
            Self::Email => &EMAIL,
            Self::Subject => &SUBJECT,
            Self::Message => &RequiredTextRule::MESSAGE,
            Self::Phone => &PHONE,
        }
    }

    /// Primary element identifier.
    pub fn as_str(self) -> &'static str {
        self.ids()[0]
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| FormError::UnknownFieldKind(s.to_string()))
    }
}

/// Outcome of validating one field's current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub kind: FieldKind,
    pub raw_value: String,
    pub is_valid: bool,
    /// Empty when the field is valid.
    pub message: String,
}

impl FieldState {
    pub fn valid(kind: FieldKind, value: &str) -> Self {
        Self {
            kind,
            raw_value: value.to_string(),
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(kind: FieldKind, value: &str, message: &str) -> Self {
        Self {
            kind,
            raw_value: value.to_string(),
            is_valid: false,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_alias() {
        assert_eq!(FieldKind::from_id("phone"), Some(FieldKind::Phone));
        assert_eq!(FieldKind::from_id("telefone"), Some(FieldKind::Phone));
        assert_eq!(FieldKind::from_id("fax"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Email".parse::<FieldKind>(), Ok(FieldKind::Email));
        assert_eq!(" subject ".parse::<FieldKind>(), Ok(FieldKind::Subject));
        assert!(matches!(
            "age".parse::<FieldKind>(),
            Err(FormError::UnknownFieldKind(_))
        ));
    }

    #[test]
    fn test_phone_id() {
        assert_eq!(FieldKind::phone_id("telefone"), Ok("telefone"));
        let err = FieldKind::phone_id("fax").unwrap_err();
        assert!(matches!(
            &err,
            FormError::InvalidInput { parameter, .. } if parameter == "phone-id"
        ));
        assert!(err.to_string().contains("'fax' is not a phone field id"));
    }

    #[test]
    fn test_triggers() {
        assert_eq!(FieldKind::Subject.trigger(), Trigger::Change);
        assert_eq!(FieldKind::Phone.trigger(), Trigger::Input);
        assert_eq!(FieldKind::Name.trigger(), Trigger::Input);
    }

    #[test]
    fn test_rule_kinds_match() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.rule().kind(), kind);
        }
    }
}
