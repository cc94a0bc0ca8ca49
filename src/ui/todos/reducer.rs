use crate::ui::mvi::Reducer;
use crate::ui::todos::intent::TodoIntent;
use crate::ui::todos::state::{
    AddPhase, EditSession, TodoFocus, TodoItem, TodoListState, ADDED_NOTICE, UPDATED_NOTICE,
};

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Intent = TodoIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodoIntent::InputChanged(value) => {
                state.input = value;
                state
            }
            TodoIntent::Add => {
                // The add control is disabled while an add is pending.
                if state.is_adding() {
                    return state;
                }
                let text = state.input.trim();
                if text.is_empty() {
                    return state;
                }
                state.adding = AddPhase::Pending {
                    text: text.to_string(),
                };
                state
            }
            TodoIntent::AddCompleted { id, text } => {
                let matches_pending =
                    matches!(&state.adding, AddPhase::Pending { text: pending } if *pending == text);
                if !matches_pending {
                    return state;
                }
                state.items.push(TodoItem {
                    id,
                    text,
                    completed: false,
                });
                state.input.clear();
                state.adding = AddPhase::Idle;
                state.notice = Some(ADDED_NOTICE.to_string());
                state
            }
            TodoIntent::Delete(id) => {
                let before = state.items.len();
                state.items.retain(|item| item.id != id);
                if state.items.len() != before && state.is_editing(id) {
                    state.editing = None;
                }
                state.clamp_selection();
                state
            }
            TodoIntent::Toggle(id) => {
                if let Some(item) = state.get_mut(id) {
                    item.completed = !item.completed;
                }
                state
            }
            TodoIntent::StartEdit(id) => {
                if state.is_saving_edit() {
                    return state;
                }
                let Some(text) = state.get(id).map(|item| item.text.clone()) else {
                    return state;
                };
                state.editing = Some(EditSession {
                    id,
                    buffer: text,
                    saving: false,
                });
                state
            }
            TodoIntent::EditChanged(value) => {
                if let Some(edit) = state.editing.as_mut().filter(|edit| !edit.saving) {
                    edit.buffer = value;
                }
                state
            }
            TodoIntent::ConfirmEdit => {
                if let Some(edit) = state.editing.as_mut() {
                    if !edit.saving && !edit.buffer.trim().is_empty() {
                        edit.saving = true;
                    }
                }
                state
            }
            TodoIntent::EditCompleted { id, text } => {
                let awaited = state
                    .editing
                    .as_ref()
                    .is_some_and(|edit| edit.id == id && edit.saving);
                if !awaited {
                    return state;
                }
                state.editing = None;
                let updated = match state.get_mut(id) {
                    Some(item) => {
                        item.text = text;
                        true
                    }
                    None => false,
                };
                if updated {
                    state.notice = Some(UPDATED_NOTICE.to_string());
                }
                state
            }
            TodoIntent::CancelEdit => {
                state.editing = None;
                state
            }
            TodoIntent::SelectNext => {
                if state.selected + 1 < state.items.len() {
                    state.selected += 1;
                }
                state
            }
            TodoIntent::SelectPrev => {
                state.selected = state.selected.saturating_sub(1);
                state
            }
            TodoIntent::FocusInput => {
                state.focus = TodoFocus::Input;
                state
            }
            TodoIntent::FocusList => {
                if !state.items.is_empty() {
                    state.focus = TodoFocus::List;
                    state.clamp_selection();
                }
                state
            }
            TodoIntent::DismissNotice => {
                state.notice = None;
                state
            }
        }
    }
}
