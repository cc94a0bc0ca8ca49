//! Validated input field.
//!
//! A field owns only transient state: whether it has been touched, whether
//! it has focus and the cached error list. The value lives in the parent
//! form and is passed in whenever the field needs it.

use crate::validation::{self, FieldId, FieldLookup, ValidationRule};

/// How the value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

/// Two independent triggers feeding the single "show errors" condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayGate {
    /// The field lost focus at least once.
    pub touched: bool,
    /// The parent demands errors be shown (submit attempted).
    pub forced: bool,
}

impl DisplayGate {
    pub fn is_open(self) -> bool {
        self.touched || self.forced
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    id: FieldId,
    label: &'static str,
    kind: InputKind,
    placeholder: &'static str,
    touched: bool,
    focused: bool,
    errors: Vec<String>,
}

impl FieldState {
    pub fn new(
        id: FieldId,
        label: &'static str,
        kind: InputKind,
        placeholder: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            kind,
            placeholder,
            touched: false,
            focused: false,
            errors: Vec::new(),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Cached errors from the last evaluation, whether shown or not.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn gate(&self, forced: bool) -> DisplayGate {
        DisplayGate {
            touched: self.touched,
            forced,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Marks the field touched and unfocused.
    ///
    /// Returns true when this blur is the one that touched the field.
    pub fn blur(&mut self) -> bool {
        self.focused = false;
        let first = !self.touched;
        self.touched = true;
        first
    }

    /// Recompute the cached errors.
    ///
    /// While the gate is closed nothing is evaluated and the cache stays
    /// empty, which is indistinguishable from the outside since closed
    /// fields show nothing anyway.
    pub fn revalidate(
        &mut self,
        rules: &[ValidationRule],
        value: &str,
        lookup: &impl FieldLookup,
        forced: bool,
    ) {
        if self.gate(forced).is_open() {
            self.errors = validation::evaluate(rules, value, lookup);
        } else {
            self.errors.clear();
        }
    }

    /// Errors the user should see right now.
    pub fn visible_errors(&self, forced: bool) -> &[String] {
        if self.gate(forced).is_open() {
            &self.errors
        } else {
            &[]
        }
    }

    /// The "error" visual state of the input.
    pub fn shows_error(&self, forced: bool) -> bool {
        !self.visible_errors(forced).is_empty()
    }

    /// What the input box prints for `value`.
    pub fn display_value(&self, value: &str) -> String {
        match self.kind {
            InputKind::Password => "•".repeat(value.chars().count()),
            InputKind::Text | InputKind::Email => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::NoSiblings;

    fn username() -> FieldState {
        FieldState::new(FieldId::Username, "Username", InputKind::Text, "")
    }

    fn rules() -> Vec<ValidationRule> {
        vec![
            ValidationRule::min_length(3, "too short"),
            ValidationRule::identifier("bad chars"),
        ]
    }

    #[test]
    fn untouched_unforced_field_shows_nothing() {
        let mut field = username();
        field.revalidate(&rules(), "a-", &NoSiblings, false);
        assert!(field.visible_errors(false).is_empty());
        assert!(!field.shows_error(false));
    }

    #[test]
    fn forcing_reveals_every_failing_rule() {
        let mut field = username();
        field.revalidate(&rules(), "a-", &NoSiblings, true);
        assert_eq!(field.visible_errors(true), ["too short", "bad chars"]);
        assert!(!field.is_touched());
    }

    #[test]
    fn blur_touches_once() {
        let mut field = username();
        field.focus();
        assert!(field.is_focused());
        assert!(field.blur());
        assert!(!field.is_focused());
        assert!(!field.blur());
        assert!(field.is_touched());
    }

    #[test]
    fn touched_field_tracks_projection() {
        let mut field = username();
        field.blur();
        field.revalidate(&rules(), "ab", &NoSiblings, false);
        assert_eq!(field.errors(), ["too short"]);
        field.revalidate(&rules(), "abc", &NoSiblings, false);
        assert!(field.errors().is_empty());
    }

    #[test]
    fn focus_does_not_change_outcome() {
        let mut focused = username();
        let mut plain = username();
        focused.blur();
        plain.blur();
        focused.focus();
        focused.revalidate(&rules(), "x", &NoSiblings, false);
        plain.revalidate(&rules(), "x", &NoSiblings, false);
        assert_eq!(focused.errors(), plain.errors());
    }

    #[test]
    fn password_is_masked() {
        let field = FieldState::new(FieldId::Password, "Password", InputKind::Password, "");
        assert_eq!(field.display_value("abc"), "•••");
        assert_eq!(username().display_value("abc"), "abc");
    }

    #[test]
    fn gate_is_an_or() {
        assert!(!DisplayGate::default().is_open());
        assert!(DisplayGate { touched: true, forced: false }.is_open());
        assert!(DisplayGate { touched: false, forced: true }.is_open());
    }
}
