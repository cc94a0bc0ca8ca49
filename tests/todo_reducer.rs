use formtodo::tasks::Operation;
use formtodo::ui::mvi::Reducer;
use formtodo::ui::todos::{
    AddPhase, TodoIntent, TodoItem, TodoListState, TodoReducer, ADDED_NOTICE, UPDATED_NOTICE,
};

fn reduce(state: TodoListState, intent: TodoIntent) -> TodoListState {
    TodoReducer::reduce(state, intent)
}

fn add(state: TodoListState, id: u64, text: &str) -> TodoListState {
    let state = reduce(state, TodoIntent::InputChanged(text.to_string()));
    let state = reduce(state, TodoIntent::Add);
    let pending = match &state.adding {
        AddPhase::Pending { text } => text.clone(),
        AddPhase::Idle => return state,
    };
    reduce(state, TodoIntent::AddCompleted { id, text: pending })
}

fn list(texts: &[&str]) -> TodoListState {
    let mut state = TodoListState::default();
    for (idx, text) in texts.iter().enumerate() {
        state = add(state, idx as u64 + 1, text);
    }
    reduce(state, TodoIntent::DismissNotice)
}

#[test]
fn test_blank_input_does_not_add() {
    for input in ["", "   ", "\t"] {
        let state = reduce(
            TodoListState::default(),
            TodoIntent::InputChanged(input.to_string()),
        );
        let state = reduce(state, TodoIntent::Add);
        assert_eq!(state.adding, AddPhase::Idle);
        assert!(state.pending_operations().is_empty());
        assert!(state.items.is_empty());
    }
}

#[test]
fn test_add_appends_after_completion() {
    let state = reduce(
        TodoListState::default(),
        TodoIntent::InputChanged("Buy milk".into()),
    );
    let state = reduce(state, TodoIntent::Add);
    assert!(state.items.is_empty());
    assert_eq!(
        state.pending_operations(),
        vec![Operation::AddTodo {
            text: "Buy milk".into()
        }]
    );

    let state = reduce(
        state,
        TodoIntent::AddCompleted {
            id: 7,
            text: "Buy milk".into(),
        },
    );
    assert_eq!(
        state.items,
        vec![TodoItem {
            id: 7,
            text: "Buy milk".into(),
            completed: false,
        }]
    );
    assert!(state.input.is_empty());
    assert_eq!(state.adding, AddPhase::Idle);
    assert_eq!(state.notice.as_deref(), Some(ADDED_NOTICE));
}

#[test]
fn test_items_keep_insertion_order() {
    let state = list(&["first", "second", "third"]);
    let texts: Vec<&str> = state.items.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn test_toggle_twice_restores_item() {
    let original = list(&["a", "b"]);
    let once = reduce(original.clone(), TodoIntent::Toggle(2));
    assert!(once.get(2).is_some_and(|item| item.completed));
    assert!(once.get(1).is_some_and(|item| !item.completed));

    let twice = reduce(once, TodoIntent::Toggle(2));
    assert_eq!(twice.items, original.items);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let original = list(&["a", "b"]);
    let state = reduce(original.clone(), TodoIntent::Delete(99));
    assert_eq!(state, original);
}

#[test]
fn test_delete_removes_only_that_item() {
    let state = reduce(list(&["a", "b", "c"]), TodoIntent::Delete(2));
    let ids: Vec<u64> = state.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn test_cancel_edit_keeps_text() {
    let mut state = list(&["a"]);
    state = reduce(state, TodoIntent::StartEdit(1));
    assert!(state.is_editing(1));
    state = reduce(state, TodoIntent::EditChanged("changed".into()));
    state = reduce(state, TodoIntent::CancelEdit);

    assert!(state.editing.is_none());
    assert_eq!(state.items[0].text, "a");
}

#[test]
fn test_confirmed_edit_replaces_text_after_save() {
    let mut state = list(&["a"]);
    state = reduce(state, TodoIntent::StartEdit(1));
    state = reduce(state, TodoIntent::EditChanged("  walk dog ".into()));
    state = reduce(state, TodoIntent::ConfirmEdit);
    assert!(state.is_saving_edit());
    assert_eq!(state.items[0].text, "a");
    assert_eq!(
        state.pending_operations(),
        vec![Operation::SaveEdit {
            id: 1,
            text: "walk dog".into()
        }]
    );

    state = reduce(
        state,
        TodoIntent::EditCompleted {
            id: 1,
            text: "walk dog".into(),
        },
    );
    assert!(state.editing.is_none());
    assert_eq!(state.items[0].text, "walk dog");
    assert_eq!(state.notice.as_deref(), Some(UPDATED_NOTICE));
}

#[test]
fn test_start_edit_on_unknown_id_is_noop() {
    let original = list(&["a"]);
    let state = reduce(original.clone(), TodoIntent::StartEdit(42));
    assert_eq!(state, original);
}

#[test]
fn test_deleting_last_item_returns_focus_to_input() {
    let mut state = list(&["a"]);
    state = reduce(state, TodoIntent::FocusList);
    state = reduce(state, TodoIntent::Delete(1));
    assert!(state.is_empty());
    assert_eq!(state.focus, formtodo::ui::todos::TodoFocus::Input);
}
