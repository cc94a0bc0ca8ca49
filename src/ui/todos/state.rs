use crate::tasks::Operation;
use crate::ui::mvi::UiState;

pub const EMPTY_PLACEHOLDER: &str = "No todos yet";
pub const ADDED_NOTICE: &str = "Todo added";
pub const UPDATED_NOTICE: &str = "Todo updated";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddPhase {
    #[default]
    Idle,
    /// Waiting to append `text`. Not visible in the list yet.
    Pending { text: String },
}

/// Inline edit of one todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: u64,
    pub buffer: String,
    /// Confirmed; waiting on the simulated save. The buffer is frozen.
    pub saving: bool,
}

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFocus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoListState {
    /// Insertion order.
    pub items: Vec<TodoItem>,
    pub input: String,
    pub adding: AddPhase,
    pub editing: Option<EditSession>,
    pub focus: TodoFocus,
    pub selected: usize,
    pub notice: Option<String>,
}

impl UiState for TodoListState {}

impl TodoListState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(super) fn get_mut(&mut self, id: u64) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.items.get(self.selected)
    }

    pub fn is_adding(&self) -> bool {
        matches!(self.adding, AddPhase::Pending { .. })
    }

    pub fn is_saving_edit(&self) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.saving)
    }

    pub fn is_editing(&self, id: u64) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.id == id)
    }

    /// Operations that should be in flight for this state.
    pub fn pending_operations(&self) -> Vec<Operation> {
        let mut operations = Vec::new();
        if let AddPhase::Pending { text } = &self.adding {
            operations.push(Operation::AddTodo { text: text.clone() });
        }
        if let Some(edit) = self.editing.as_ref().filter(|edit| edit.saving) {
            operations.push(Operation::SaveEdit {
                id: edit.id,
                text: edit.buffer.trim().to_string(),
            });
        }
        operations
    }

    pub(super) fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.selected = 0;
            self.focus = TodoFocus::Input;
        } else if self.selected >= self.items.len() {
            self.selected = self.items.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, text: &str) -> TodoItem {
        TodoItem {
            id,
            text: text.into(),
            completed: false,
        }
    }

    #[test]
    fn pending_operations_reflect_add_and_save() {
        let state = TodoListState {
            items: vec![item(1, "a")],
            adding: AddPhase::Pending {
                text: "Buy milk".into(),
            },
            editing: Some(EditSession {
                id: 1,
                buffer: "  new  ".into(),
                saving: true,
            }),
            ..TodoListState::default()
        };
        assert_eq!(
            state.pending_operations(),
            vec![
                Operation::AddTodo {
                    text: "Buy milk".into()
                },
                Operation::SaveEdit {
                    id: 1,
                    text: "new".into()
                },
            ]
        );
    }

    #[test]
    fn unsaved_edit_is_not_pending() {
        let state = TodoListState {
            items: vec![item(1, "a")],
            editing: Some(EditSession {
                id: 1,
                buffer: "b".into(),
                saving: false,
            }),
            ..TodoListState::default()
        };
        assert!(state.pending_operations().is_empty());
        assert!(state.is_editing(1));
        assert!(!state.is_saving_edit());
    }

    #[test]
    fn clamp_selection_returns_focus_to_input_when_empty() {
        let mut state = TodoListState {
            focus: TodoFocus::List,
            selected: 3,
            ..TodoListState::default()
        };
        state.clamp_selection();
        assert_eq!(state.selected, 0);
        assert_eq!(state.focus, TodoFocus::Input);
    }
}
