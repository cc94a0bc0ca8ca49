use crate::ui::mvi::Intent;
use crate::validation::{FieldId, ValidationRule};

#[derive(Debug, Clone)]
pub enum RegistrationIntent {
    /// New value for a field (one per keystroke).
    Change { field: FieldId, value: String },
    /// Move focus to a field, blurring the previous one.
    Focus(FieldId),
    /// Blur the focused field without focusing another.
    Blur,
    FocusNext,
    FocusPrev,
    /// Replace a field's rule set.
    ReplaceRules {
        field: FieldId,
        rules: Vec<ValidationRule>,
    },
    /// User pressed the submit control.
    Submit,
    /// The simulated round-trip finished.
    SubmitCompleted,
    /// Close the success acknowledgment.
    DismissAcknowledgment,
}

impl Intent for RegistrationIntent {}
