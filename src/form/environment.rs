//! Environment boundary.
//!
//! The controller never touches a document directly. A host (browser
//! binding, test double, the in-memory form) implements these traits and
//! feeds events into [`FormController`](super::FormController).

use crate::error::FormResult;

/// Element that displays a field's error message, usually its next sibling.
pub trait ErrorSlot {
    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);
}

/// A single editable field.
pub trait FieldHandle {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Current caret offset, in characters.
    ///
    /// # Errors
    /// Fails when the element has no text selection (e.g. a select box).
    fn selection_start(&self) -> FormResult<usize>;

    /// Places the selection; `start == end` collapses it to a caret.
    fn set_selection_range(&mut self, start: usize, end: usize) -> FormResult<()>;

    fn border_color(&self) -> &str;

    fn set_border_color(&mut self, color: &str);

    fn error_slot(&mut self) -> Option<&mut dyn ErrorSlot>;
}

/// The document hosting the form.
pub trait FormEnvironment {
    fn has_field(&self, id: &str) -> bool;

    fn field(&mut self, id: &str) -> Option<&mut dyn FieldHandle>;

    /// Shows the acknowledgement dialog.
    fn notify(&mut self, message: &str);

    /// Restores every field to its initial value.
    fn reset(&mut self);
}
