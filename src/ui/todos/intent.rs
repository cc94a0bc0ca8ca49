use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TodoIntent {
    /// New contents of the "new todo" input.
    InputChanged(String),
    /// Request to add the current input.
    Add,
    /// Simulated latency for an add elapsed.
    AddCompleted { id: u64, text: String },
    Delete(u64),
    Toggle(u64),
    /// Open inline editing seeded with the todo's text.
    StartEdit(u64),
    /// New contents of the edit buffer.
    EditChanged(String),
    ConfirmEdit,
    /// Simulated latency for an edit save elapsed.
    EditCompleted { id: u64, text: String },
    CancelEdit,
    SelectNext,
    SelectPrev,
    FocusInput,
    FocusList,
    DismissNotice,
}

impl Intent for TodoIntent {}
