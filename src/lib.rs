//! Contact form validation with a live phone-number input mask.
//!
//! This library validates the fields of a contact form (name, email,
//! subject, message, phone) and keeps the phone field formatted as the
//! user types, pastes or submits.
//!
//! # Features
//!
//! - **Phone mask**: `(11) 2345-6789` landlines and `(11) 91234-5678` mobiles,
//!   rendered progressively from whatever digits are present
//! - **Caret preservation**: the caret follows the length change the mask
//!   introduced
//! - **Field rules**: one rule per field kind, emptiness checked first
//! - **Eager form validation**: every field is annotated, not just the first
//!   failure
//!
//! # Architecture
//!
//! - [`domain`]: pure mask and validation logic
//! - [`form`]: event controller behind an environment trait boundary, plus an
//!   in-memory environment
//! - [`error`]: errors from the environment boundary
//!
//! # Quick Start
//!
//! ```
//! use contact_form::{validate, FieldKind, PhoneMask};
//!
//! let digits = PhoneMask::sanitize("11 91234-5678");
//! assert_eq!(PhoneMask::format(&digits).as_str(), "(11) 91234-5678");
//!
//! let state = validate(FieldKind::Email, "a@b");
//! assert!(!state.is_valid);
//! ```
//!
//! # Driving a form
//!
//! ```
//! use contact_form::{FormController, FormEvent, MemoryField, MemoryForm};
//!
//! let form = MemoryForm::new()
//!     .with_field("name", MemoryField::new("Ana"))
//!     .with_field("phone", MemoryField::new("11912345678"));
//! let mut controller = FormController::new(form);
//!
//! let outcome = controller.handle(FormEvent::Submit);
//! assert!(outcome.default_prevented);
//! assert!(outcome.report.expect("report").is_valid());
//! assert_eq!(controller.environment().notifications().len(), 1);
//! ```

pub mod domain;
pub mod error;
pub mod form;

pub use domain::{
    validate, DigitString, FieldKind, FieldRule, FieldState, FormattedPhone, PhoneMask,
};
pub use error::{FormError, FormResult};
pub use form::{
    EventOutcome, FieldHandle, FormConfig, FormController, FormEnvironment, FormEvent,
    FormReport, MemoryField, MemoryForm,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_creation() {
        let controller = FormController::new(MemoryForm::new());
        assert_eq!(controller.config(), &FormConfig::default());
    }

    #[test]
    fn test_mask_and_rules_agree() {
        let formatted = PhoneMask::format_phone("1123456789");
        assert!(validate(FieldKind::Phone, formatted.as_str()).is_valid);
    }
}
