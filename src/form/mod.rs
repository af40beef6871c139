//! Event handling for the contact form.
//!
//! [`FormController`] owns a [`FormEnvironment`] and turns the events it
//! receives into mask and validation passes. All document access goes
//! through the environment traits, so the controller runs the same against
//! a browser binding or the in-memory [`MemoryForm`].

pub mod environment;
pub mod memory;
pub mod presentation;

pub use environment::{ErrorSlot, FieldHandle, FormEnvironment};
pub use memory::{MemoryErrorSlot, MemoryField, MemoryForm};
pub use presentation::FormConfig;

use crate::domain::{validate, FieldKind, FieldState, PhoneMask, Trigger};
use tracing::{debug, info, trace};

/// A notification delivered by the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The field's text changed.
    Input { field: String },

    /// The field's value was committed (select boxes).
    Change { field: String },

    /// Clipboard text is about to be pasted into the field.
    Paste { field: String, text: String },

    /// A key was pressed while the field had focus.
    KeyDown { field: String, key: String },

    /// The form is being submitted.
    Submit,
}

impl FormEvent {
    pub fn input(field: &str) -> Self {
        Self::Input {
            field: field.to_string(),
        }
    }

    pub fn change(field: &str) -> Self {
        Self::Change {
            field: field.to_string(),
        }
    }

    pub fn paste(field: &str, text: &str) -> Self {
        Self::Paste {
            field: field.to_string(),
            text: text.to_string(),
        }
    }

    pub fn key_down(field: &str, key: &str) -> Self {
        Self::KeyDown {
            field: field.to_string(),
            key: key.to_string(),
        }
    }
}

/// States of every field present in the form, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    states: Vec<FieldState>,
}

impl FormReport {
    /// True iff every present field is valid.
    pub fn is_valid(&self) -> bool {
        self.states.iter().all(|state| state.is_valid)
    }

    /// States in form order.
    pub fn states(&self) -> &[FieldState] {
        &self.states
    }

    /// State of one kind, `None` if the form has no such field.
    pub fn state(&self, kind: FieldKind) -> Option<&FieldState> {
        self.states.iter().find(|state| state.kind == kind)
    }

    /// Invalid states only.
    pub fn failures(&self) -> impl Iterator<Item = &FieldState> {
        self.states.iter().filter(|state| !state.is_valid)
    }
}

/// What handling an event did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The environment must skip its default action (paste, keystroke, submit).
    pub default_prevented: bool,

    /// State of the field the event validated, if any.
    pub field_state: Option<FieldState>,

    /// Form-level result, set by submit.
    pub report: Option<FormReport>,
}

impl EventOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn prevented() -> Self {
        Self {
            default_prevented: true,
            ..Self::default()
        }
    }

    fn validated(state: Option<FieldState>) -> Self {
        Self {
            field_state: state,
            ..Self::default()
        }
    }
}

/// Wires environment events to the phone mask and field validation.
pub struct FormController<E> {
    env: E,
    config: FormConfig,
}

impl<E: FormEnvironment> FormController<E> {
    /// Creates a controller with the default configuration.
    pub fn new(env: E) -> Self {
        Self::with_config(env, FormConfig::default())
    }

    /// Creates a controller with a custom configuration.
    pub fn with_config(env: E, config: FormConfig) -> Self {
        Self { env, config }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Consumes the controller, returning the environment.
    pub fn into_environment(self) -> E {
        self.env
    }

    /// Identifier of the element serving as `kind`, if the form has one.
    pub fn field_id(&self, kind: FieldKind) -> Option<&'static str> {
        kind.ids().iter().copied().find(|id| self.env.has_field(id))
    }

    /// Handles one event to completion.
    pub fn handle(&mut self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::Input { field } => self.on_edit(&field, Trigger::Input),
            FormEvent::Change { field } => self.on_edit(&field, Trigger::Change),
            FormEvent::Paste { field, text } => self.on_paste(&field, &text),
            FormEvent::KeyDown { field, key } => self.on_key_down(&field, &key),
            FormEvent::Submit => self.on_submit(),
        }
    }

    /// Validates one field and updates its error annotation.
    ///
    /// Returns `None` when the form has no such field.
    pub fn validate_field(&mut self, kind: FieldKind) -> Option<FieldState> {
        let id = self.field_id(kind)?;
        let field = self.env.field(id)?;
        let state = validate(kind, &field.value());
        self.config.present(field, &state);
        debug!(field = id, valid = state.is_valid, message = %state.message, "validated field");
        Some(state)
    }

    /// Validates every present field, without stopping at the first failure.
    pub fn validate_form(&mut self) -> FormReport {
        let states = FieldKind::ALL
            .into_iter()
            .filter_map(|kind| self.validate_field(kind))
            .collect();
        FormReport { states }
    }

    /// Kind of the event target, if it is the form's active element for it.
    fn resolve(&self, id: &str) -> Option<FieldKind> {
        let kind = FieldKind::from_id(id)?;
        (self.field_id(kind) == Some(id)).then_some(kind)
    }

    fn on_edit(&mut self, id: &str, trigger: Trigger) -> EventOutcome {
        match self.resolve(id) {
            Some(FieldKind::Phone) if trigger == Trigger::Input => {
                EventOutcome::validated(self.mask_input(id))
            }
            Some(kind) if kind.trigger() == trigger => {
                EventOutcome::validated(self.validate_field(kind))
            }
            _ => EventOutcome::ignored(),
        }
    }

    /// Reformats the phone field in place and shifts the caret by the
    /// length change.
    fn mask_input(&mut self, id: &str) -> Option<FieldState> {
        let field = self.env.field(id)?;
        let caret = field.selection_start().unwrap_or_else(|err| {
            trace!(%err, "caret read failed, assuming 0");
            0
        });
        let previous = field.value();
        let formatted = PhoneMask::format_phone(&previous);
        field.set_value(formatted.as_str());

        let state = validate(FieldKind::Phone, formatted.as_str());
        self.config.present(field, &state);

        let delta = char_len(formatted.as_str()) - char_len(&previous);
        let caret = PhoneMask::adjust_caret(caret, delta);
        if let Err(err) = field.set_selection_range(caret, caret) {
            trace!(%err, "caret write failed");
        }
        debug!(
            field = id,
            value = formatted.as_str(),
            caret,
            valid = state.is_valid,
            "masked phone input"
        );
        Some(state)
    }

    fn on_paste(&mut self, id: &str, text: &str) -> EventOutcome {
        if self.resolve(id) != Some(FieldKind::Phone) {
            return EventOutcome::ignored();
        }
        let mut outcome = EventOutcome::prevented();
        if let Some(field) = self.env.field(id) {
            let formatted = PhoneMask::format_phone(text);
            field.set_value(formatted.as_str());
            debug!(field = id, value = formatted.as_str(), "pasted into phone field");
        }
        outcome.field_state = self.validate_field(FieldKind::Phone);
        outcome
    }

    fn on_key_down(&mut self, id: &str, key: &str) -> EventOutcome {
        if self.resolve(id) == Some(FieldKind::Phone) && !PhoneMask::is_allowed_key(key) {
            trace!(field = id, key, "rejected keystroke");
            return EventOutcome::prevented();
        }
        EventOutcome::ignored()
    }

    fn on_submit(&mut self) -> EventOutcome {
        if let Some(id) = self.field_id(FieldKind::Phone) {
            if let Some(field) = self.env.field(id) {
                let formatted = PhoneMask::format_phone(&field.value());
                field.set_value(formatted.as_str());
            }
        }

        let report = self.validate_form();
        if report.is_valid() {
            info!(fields = report.states().len(), "form submitted");
            self.env.notify(&self.config.success_message);
            if self.config.reset_on_success {
                self.env.reset();
            }
        } else {
            info!(
                failures = report.failures().count(),
                "form submission blocked by validation"
            );
        }

        EventOutcome {
            default_prevented: true,
            field_state: None,
            report: Some(report),
        }
    }
}

fn char_len(s: &str) -> isize {
    s.chars().count() as isize
}
