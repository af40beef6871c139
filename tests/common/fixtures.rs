//! Test fixtures and form builders.

use contact_form::{FormConfig, FormController, MemoryField, MemoryForm};

/// A complete, valid set of contact form values.
pub const VALID_NAME: &str = "Ana Souza";
pub const VALID_EMAIL: &str = "ana@example.com";
pub const VALID_SUBJECT: &str = "support";
pub const VALID_MESSAGE: &str = "I would like to know more about your plans.";
pub const VALID_PHONE: &str = "11912345678";

/// Builder for in-memory contact forms.
///
/// # Example
///
/// ```ignore
/// let controller = ContactFormBuilder::valid()
///     .with_email("broken")
///     .without("subject")
///     .controller();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactFormBuilder {
    fields: Vec<(String, MemoryField)>,
    config: FormConfig,
}

impl ContactFormBuilder {
    /// Creates an empty form with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form with every field present and valid.
    pub fn valid() -> Self {
        Self::new()
            .with_name(VALID_NAME)
            .with_email(VALID_EMAIL)
            .with_subject(VALID_SUBJECT)
            .with_message(VALID_MESSAGE)
            .with_phone(VALID_PHONE)
    }

    pub fn with_field(mut self, id: &str, field: MemoryField) -> Self {
        self.fields.retain(|(existing, _)| existing != id);
        self.fields.push((id.to_string(), field));
        self
    }

    pub fn with_name(self, value: &str) -> Self {
        self.with_field("name", MemoryField::new(value))
    }

    pub fn with_email(self, value: &str) -> Self {
        self.with_field("email", MemoryField::new(value))
    }

    /// Subject is a select box, so it has no caret.
    pub fn with_subject(self, value: &str) -> Self {
        self.with_field("subject", MemoryField::new(value).without_selection())
    }

    pub fn with_message(self, value: &str) -> Self {
        self.with_field("message", MemoryField::new(value))
    }

    pub fn with_phone(self, value: &str) -> Self {
        self.with_field("phone", MemoryField::new(value))
    }

    pub fn without(mut self, id: &str) -> Self {
        self.fields.retain(|(existing, _)| existing != id);
        self
    }

    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> MemoryForm {
        self.fields
            .into_iter()
            .fold(MemoryForm::new(), |form, (id, field)| {
                form.with_field(&id, field)
            })
    }

    pub fn controller(self) -> FormController<MemoryForm> {
        let config = self.config.clone();
        FormController::with_config(self.build(), config)
    }
}

/// Controller over a single empty phone field.
pub fn phone_controller() -> FormController<MemoryForm> {
    ContactFormBuilder::new().with_phone("").controller()
}

/// Types every character of `text` into `field_id`, one keystroke each.
pub fn type_text(controller: &mut FormController<MemoryForm>, field_id: &str, text: &str) {
    for c in text.chars() {
        controller.type_key(field_id, &c.to_string());
    }
}
