//! Error presentation and form configuration.

use super::environment::FieldHandle;
use crate::domain::FieldState;

pub const ERROR_BORDER_COLOR: &str = "#e30613";
pub const NEUTRAL_BORDER_COLOR: &str = "#ddd";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We will get back to you soon.";

/// Presentation and submit behaviour of a [`FormController`](super::FormController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub error_border_color: String,
    pub neutral_border_color: String,
    pub success_message: String,
    /// Reset the form after a successful submit.
    pub reset_on_success: bool,
}

impl FormConfig {
    pub fn new() -> Self {
        Self {
            error_border_color: ERROR_BORDER_COLOR.to_string(),
            neutral_border_color: NEUTRAL_BORDER_COLOR.to_string(),
            success_message: SUCCESS_MESSAGE.to_string(),
            reset_on_success: true,
        }
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn with_reset_on_success(mut self, reset: bool) -> Self {
        self.reset_on_success = reset;
        self
    }

    pub fn with_border_colors(
        mut self,
        error: impl Into<String>,
        neutral: impl Into<String>,
    ) -> Self {
        self.error_border_color = error.into();
        self.neutral_border_color = neutral.into();
        self
    }

    /// Shows or clears the error annotation for `state` on `field`.
    pub fn present(&self, field: &mut dyn FieldHandle, state: &FieldState) {
        if state.is_valid {
            field.set_border_color(&self.neutral_border_color);
            if let Some(slot) = field.error_slot() {
                slot.set_text("");
                slot.set_visible(false);
            }
        } else {
            field.set_border_color(&self.error_border_color);
            if let Some(slot) = field.error_slot() {
                slot.set_text(&state.message);
                slot.set_visible(true);
            }
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}
