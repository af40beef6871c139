//! Field rules and the phone mask.
//!
//! Everything in this module is pure: values go in, states come out. No
//! environment access happens here, so every rule is testable on plain
//! strings.

pub mod email;
pub mod field;
pub mod phone;
pub mod text;

pub use email::EmailRule;
pub use field::{FieldKind, FieldState, Trigger};
pub use phone::{DigitString, FormattedPhone, PhoneMask, PhoneRule};
pub use text::{RequiredTextRule, SubjectRule};

/// Validation rule for one field kind.
///
/// A rule reports the first failing check, emptiness before length or
/// format, as a static message.
pub trait FieldRule: Send + Sync {
    fn kind(&self) -> FieldKind;

    fn check(&self, value: &str) -> Result<(), &'static str>;

    fn evaluate(&self, value: &str) -> FieldState {
        match self.check(value) {
            Ok(()) => FieldState::valid(self.kind(), value),
            Err(message) => FieldState::invalid(self.kind(), value, message),
        }
    }
}

/// Validates `value` as a field of the given kind.
pub fn validate(kind: FieldKind, value: &str) -> FieldState {
    kind.rule().evaluate(value)
}
