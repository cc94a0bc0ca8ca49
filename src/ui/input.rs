use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, View};
use crate::ui::registration::RegistrationIntent;
use crate::ui::todos::{TodoFocus, TodoIntent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Any key closes the acknowledgment popup.
    if app.popup_message().is_some() {
        app.dismiss_popup();
        return;
    }

    match key.code {
        KeyCode::F(1) => {
            app.set_view(View::Registration);
            return;
        }
        KeyCode::F(2) => {
            app.set_view(View::Todos);
            return;
        }
        _ => {}
    }
    if is_ctrl_char(key, 'n') {
        app.toggle_view();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }

    match app.view() {
        View::Registration => handle_registration_key(app, key),
        View::Todos => handle_todo_key(app, key),
    }
}

fn handle_registration_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_registration(RegistrationIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_registration(RegistrationIntent::FocusPrev),
        KeyCode::Esc => app.dispatch_registration(RegistrationIntent::Blur),
        KeyCode::Enter => app.dispatch_registration(RegistrationIntent::Submit),
        _ => {
            let Some(field) = app.registration().focus else {
                return;
            };
            let edited = edit_text(app.registration().data.value(field), key);
            if let Some(value) = edited {
                app.dispatch_registration(RegistrationIntent::Change { field, value });
            }
        }
    }
}

fn handle_todo_key(app: &mut App, key: KeyEvent) {
    let buffer = app.todos().editing.as_ref().map(|edit| edit.buffer.clone());
    if let Some(buffer) = buffer {
        match key.code {
            KeyCode::Enter => app.dispatch_todos(TodoIntent::ConfirmEdit),
            KeyCode::Esc => app.dispatch_todos(TodoIntent::CancelEdit),
            _ => {
                if let Some(value) = edit_text(&buffer, key) {
                    app.dispatch_todos(TodoIntent::EditChanged(value));
                }
            }
        }
        return;
    }

    let focus = app.todos().focus;
    match focus {
        TodoFocus::Input => match key.code {
            KeyCode::Enter => app.dispatch_todos(TodoIntent::Add),
            KeyCode::Down | KeyCode::Tab => app.dispatch_todos(TodoIntent::FocusList),
            _ => {
                let edited = edit_text(&app.todos().input, key);
                if let Some(value) = edited {
                    app.dispatch_todos(TodoIntent::InputChanged(value));
                }
            }
        },
        TodoFocus::List => {
            let selected = app.todos().selected_item().map(|item| item.id);
            match key.code {
                KeyCode::Up if app.todos().selected == 0 => {
                    app.dispatch_todos(TodoIntent::FocusInput)
                }
                KeyCode::Up => app.dispatch_todos(TodoIntent::SelectPrev),
                KeyCode::Down => app.dispatch_todos(TodoIntent::SelectNext),
                KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                    app.dispatch_todos(TodoIntent::FocusInput)
                }
                KeyCode::Char(' ') => {
                    if let Some(id) = selected {
                        app.dispatch_todos(TodoIntent::Toggle(id));
                    }
                }
                KeyCode::Delete | KeyCode::Char('d') => {
                    if let Some(id) = selected {
                        app.dispatch_todos(TodoIntent::Delete(id));
                    }
                }
                KeyCode::Enter | KeyCode::Char('e') => {
                    if let Some(id) = selected {
                        app.dispatch_todos(TodoIntent::StartEdit(id));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Apply a text-editing key to `current`.
///
/// Returns `None` for keys that do not edit text.
pub fn edit_text(current: &str, key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut value = current.to_string();
            value.push(ch);
            Some(value)
        }
        KeyCode::Backspace => {
            let mut value = current.to_string();
            value.pop()?;
            Some(value)
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends() {
        assert_eq!(edit_text("ab", key(KeyCode::Char('c'))), Some("abc".into()));
    }

    #[test]
    fn backspace_on_empty_is_not_an_edit() {
        assert_eq!(edit_text("", key(KeyCode::Backspace)), None);
        assert_eq!(edit_text("ab", key(KeyCode::Backspace)), Some("a".into()));
    }

    #[test]
    fn control_chords_are_not_text() {
        let chord = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(edit_text("ab", chord), None);
        assert!(is_ctrl_char(
            KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL),
            'q'
        ));
    }

    #[test]
    fn shifted_characters_are_text() {
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(edit_text("", shifted), Some("A".into()));
    }
}
