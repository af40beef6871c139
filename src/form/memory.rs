//! In-memory form environment.
//!
//! Models the parts of a browser form the controller relies on: values,
//! a collapsed caret, border colour, a sibling error element and the
//! acknowledgement dialog. It also replays native keystroke editing so
//! typing sessions can be simulated end to end.

use super::environment::{ErrorSlot, FieldHandle, FormEnvironment};
use super::{EventOutcome, FormController, FormEvent};
use crate::error::{FormError, FormResult};
use std::collections::BTreeMap;

/// Error element rendered next to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryErrorSlot {
    text: String,
    visible: bool,
}

impl ErrorSlot for MemoryErrorSlot {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// A text input or select box held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryField {
    id: String,
    value: String,
    initial: String,
    /// `None` for elements without a text selection.
    caret: Option<usize>,
    border_color: String,
    error: Option<MemoryErrorSlot>,
}

impl MemoryField {
    /// Creates a text input with an error slot and the caret at the end.
    pub fn new(initial: &str) -> Self {
        Self {
            id: String::new(),
            value: initial.to_string(),
            initial: initial.to_string(),
            caret: Some(initial.chars().count()),
            border_color: String::new(),
            error: Some(MemoryErrorSlot::default()),
        }
    }

    /// Drops the sibling error element.
    pub fn without_error_slot(mut self) -> Self {
        self.error = None;
        self
    }

    /// Makes caret reads and writes fail, like a select box.
    pub fn without_selection(mut self) -> Self {
        self.caret = None;
        self
    }

    /// Current caret offset, `None` for elements without a selection.
    pub fn caret(&self) -> Option<usize> {
        self.caret
    }

    /// Text of the error slot, `None` if the field has no slot.
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_ref().map(|slot| slot.text.as_str())
    }

    /// Returns true if the error slot exists and is shown.
    pub fn error_visible(&self) -> bool {
        self.error.as_ref().is_some_and(|slot| slot.visible)
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn cursor(&self) -> usize {
        self.caret.unwrap_or_else(|| self.len()).min(self.len())
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    /// Inserts text at the caret and moves the caret past it.
    pub fn insert_text(&mut self, text: &str) {
        let pos = self.cursor();
        let offset = self.byte_offset(pos);
        self.value.insert_str(offset, text);
        if self.caret.is_some() {
            self.caret = Some(pos + text.chars().count());
        }
    }

    /// Applies the browser's default action for a keydown.
    ///
    /// Returns true if the value changed, i.e. an input event would fire.
    pub fn apply_key(&mut self, key: &str) -> bool {
        let pos = self.cursor();
        let len = self.len();
        match key {
            "Backspace" if pos > 0 => {
                let start = self.byte_offset(pos - 1);
                let end = self.byte_offset(pos);
                self.value.replace_range(start..end, "");
                if self.caret.is_some() {
                    self.caret = Some(pos - 1);
                }
                true
            }
            "Delete" if pos < len => {
                let start = self.byte_offset(pos);
                let end = self.byte_offset(pos + 1);
                self.value.replace_range(start..end, "");
                true
            }
            "ArrowLeft" => self.move_caret(pos.saturating_sub(1)),
            "ArrowRight" => self.move_caret((pos + 1).min(len)),
            "Home" => self.move_caret(0),
            "End" => self.move_caret(len),
            _ if key.chars().count() == 1 => {
                self.insert_text(key);
                true
            }
            _ => false,
        }
    }

    fn move_caret(&mut self, pos: usize) -> bool {
        if self.caret.is_some() {
            self.caret = Some(pos);
        }
        false
    }

    fn reset(&mut self) {
        self.value = self.initial.clone();
        if self.caret.is_some() {
            self.caret = Some(self.len());
        }
    }
}

impl FieldHandle for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        // Assigning a value moves the caret to the end.
        if self.caret.is_some() {
            self.caret = Some(self.len());
        }
    }

    fn selection_start(&self) -> FormResult<usize> {
        self.caret.ok_or_else(|| FormError::CaretUnavailable {
            field: self.id.clone(),
        })
    }

    fn set_selection_range(&mut self, start: usize, _end: usize) -> FormResult<()> {
        if self.caret.is_none() {
            return Err(FormError::CaretUnavailable {
                field: self.id.clone(),
            });
        }
        self.caret = Some(start.min(self.len()));
        Ok(())
    }

    fn border_color(&self) -> &str {
        &self.border_color
    }

    fn set_border_color(&mut self, color: &str) {
        self.border_color = color.to_string();
    }

    fn error_slot(&mut self) -> Option<&mut dyn ErrorSlot> {
        self.error.as_mut().map(|slot| slot as &mut dyn ErrorSlot)
    }
}

/// A form document held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    fields: BTreeMap<String, MemoryField>,
    notifications: Vec<String>,
}

impl MemoryForm {
    /// Creates an empty form with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field under `id`, replacing any previous one.
    pub fn with_field(mut self, id: &str, field: MemoryField) -> Self {
        self.insert_field(id, field);
        self
    }

    /// Adds a field under `id` in place, replacing any previous one.
    pub fn insert_field(&mut self, id: &str, mut field: MemoryField) {
        field.id = id.to_string();
        self.fields.insert(id.to_string(), field);
    }

    /// Looks up a field by element id.
    pub fn get(&self, id: &str) -> Option<&MemoryField> {
        self.fields.get(id)
    }

    /// Looks up a field by element id for editing.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut MemoryField> {
        self.fields.get_mut(id)
    }

    /// Like [`get`](Self::get), but fails for unknown ids.
    pub fn require(&self, id: &str) -> FormResult<&MemoryField> {
        self.get(id)
            .ok_or_else(|| FormError::UnknownField(id.to_string()))
    }

    /// Messages shown through the acknowledgement dialog, oldest first.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl FormEnvironment for MemoryForm {
    fn has_field(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }

    fn field(&mut self, id: &str) -> Option<&mut dyn FieldHandle> {
        self.fields
            .get_mut(id)
            .map(|field| field as &mut dyn FieldHandle)
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn reset(&mut self) {
        self.fields.values_mut().for_each(MemoryField::reset);
    }
}

impl FormController<MemoryForm> {
    /// Replays one keystroke: keydown, the native edit unless suppressed,
    /// then the input event if the value changed.
    pub fn type_key(&mut self, field_id: &str, key: &str) -> EventOutcome {
        let outcome = self.handle(FormEvent::key_down(field_id, key));
        if outcome.default_prevented {
            return outcome;
        }
        let edited = self
            .environment_mut()
            .get_mut(field_id)
            .is_some_and(|field| field.apply_key(key));
        if edited {
            self.handle(FormEvent::input(field_id))
        } else {
            outcome
        }
    }

    /// Replays a paste: the native insertion only happens if not suppressed.
    pub fn paste(&mut self, field_id: &str, text: &str) -> EventOutcome {
        let outcome = self.handle(FormEvent::paste(field_id, text));
        if outcome.default_prevented {
            return outcome;
        }
        match self.environment_mut().get_mut(field_id) {
            Some(field) => field.insert_text(text),
            None => return outcome,
        }
        self.handle(FormEvent::input(field_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_key_edits_at_caret() {
        let mut field = MemoryField::new("13");
        assert!(!field.apply_key("ArrowLeft"));
        assert!(field.apply_key("2"));
        assert_eq!(field.value(), "123");
        assert_eq!(field.caret(), Some(2));

        assert!(field.apply_key("Backspace"));
        assert_eq!(field.value(), "13");
        assert_eq!(field.caret(), Some(1));

        assert!(field.apply_key("Delete"));
        assert_eq!(field.value(), "1");
        assert!(!field.apply_key("Delete"));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = MemoryField::new("12");
        field.apply_key("Home");
        assert!(!field.apply_key("Backspace"));
        assert_eq!(field.value(), "12");
    }

    #[test]
    fn test_set_value_moves_caret_to_end() {
        let mut field = MemoryField::new("");
        field.set_value("(11) 9");
        assert_eq!(field.selection_start(), Ok(6));
    }

    #[test]
    fn test_selection_unavailable() {
        let mut form = MemoryForm::new().with_field("subject", MemoryField::new("").without_selection());
        let field = form.field("subject").expect("field");
        assert_eq!(
            field.selection_start(),
            Err(FormError::CaretUnavailable {
                field: "subject".to_string()
            })
        );
        assert!(field.set_selection_range(0, 0).is_err());
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut form = MemoryForm::new().with_field("name", MemoryField::new("Ana"));
        form.field("name").expect("field").set_value("Bob");
        form.reset();
        assert_eq!(form.require("name").map(|f| f.value()), Ok("Ana".to_string()));
        assert!(form.require("email").is_err());
    }
}
