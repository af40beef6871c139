//! Custom assertions for field presentation.

use contact_form::form::presentation::{ERROR_BORDER_COLOR, NEUTRAL_BORDER_COLOR};
use contact_form::{FieldHandle, FormController, MemoryField, MemoryForm};

fn field<'a>(controller: &'a FormController<MemoryForm>, id: &str) -> &'a MemoryField {
    controller
        .environment()
        .get(id)
        .unwrap_or_else(|| panic!("Form should contain a field with id '{}'", id))
}

/// Asserts that a field shows `message` with the error border.
///
/// # Panics
/// Panics if the field is missing, not annotated, or shows another message.
pub fn assert_field_error(controller: &FormController<MemoryForm>, id: &str, message: &str) {
    let field = field(controller, id);
    assert_eq!(
        field.border_color(),
        ERROR_BORDER_COLOR,
        "Field '{}' should have the error border",
        id
    );
    assert!(
        field.error_visible(),
        "Error slot of field '{}' should be visible",
        id
    );
    assert_eq!(
        field.error_text(),
        Some(message),
        "Field '{}' shows the wrong message",
        id
    );
}

/// Asserts that a field has been validated and shows no error.
///
/// # Panics
/// Panics if the field is missing or still annotated.
pub fn assert_field_clear(controller: &FormController<MemoryForm>, id: &str) {
    let field = field(controller, id);
    assert_eq!(
        field.border_color(),
        NEUTRAL_BORDER_COLOR,
        "Field '{}' should have the neutral border",
        id
    );
    assert!(
        !field.error_visible(),
        "Error slot of field '{}' should be hidden, shows {:?}",
        id,
        field.error_text()
    );
}

/// Asserts the value and caret of a field.
pub fn assert_value_and_caret(
    controller: &FormController<MemoryForm>,
    id: &str,
    value: &str,
    caret: usize,
) {
    let field = field(controller, id);
    assert_eq!(field.value(), value, "Unexpected value in '{}'", id);
    assert_eq!(field.caret(), Some(caret), "Unexpected caret in '{}'", id);
}
