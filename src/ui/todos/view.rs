//! Rendering of the todo list.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{
    spinner, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK,
};
use crate::ui::todos::state::{TodoFocus, TodoItem, TodoListState, EMPTY_PLACEHOLDER};

const LIST_WIDTH: u16 = 64;
const INPUT_PLACEHOLDER: &str = "Add a new task...";

pub fn render_todos(frame: &mut Frame, area: Rect, state: &TodoListState, animation_tick: u8) {
    let width = LIST_WIDTH.min(area.width);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    render_input(frame, rows[0], state);
    frame.render_widget(Paragraph::new(add_hint(state, animation_tick)), rows[1]);
    render_list(frame, rows[2], state, animation_tick);
}

fn render_input(frame: &mut Frame, area: Rect, state: &TodoListState) {
    let focused = state.focus == TodoFocus::Input && state.editing.is_none();
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let content = if state.input.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(state.input.clone(), Style::default().fg(HEADER_TEXT))
    };
    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(" New todo ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);

    if focused && area.height >= 3 {
        let typed = state.input.chars().count() as u16;
        let x = area.x + 1 + typed.min(area.width.saturating_sub(3));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn add_hint(state: &TodoListState, animation_tick: u8) -> Line<'static> {
    if state.is_adding() {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(" {} Adding... ", spinner(animation_tick)),
                Style::default().fg(MUTED_TEXT).bg(ACTIVE_HIGHLIGHT),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                " Add ",
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", Style::default().fg(MUTED_TEXT)),
        ])
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &TodoListState, animation_tick: u8) {
    let block = Block::default()
        .title(Span::styled(
            " Todo List ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let lines = list_lines(state, animation_tick);
    let inner_height = block.inner(area).height as usize;
    // Keep the selected row on screen.
    let scroll = (state.selected + 1).saturating_sub(inner_height.max(1)) as u16;
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn list_lines(state: &TodoListState, animation_tick: u8) -> Vec<Line<'static>> {
    if state.is_empty() {
        return vec![Line::from(Span::styled(
            EMPTY_PLACEHOLDER,
            Style::default().fg(MUTED_TEXT),
        ))];
    }

    state
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let selected = state.focus == TodoFocus::List && idx == state.selected;
            let mut line = item_line(state, item, animation_tick);
            if selected {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            line
        })
        .collect()
}

fn item_line(state: &TodoListState, item: &TodoItem, animation_tick: u8) -> Line<'static> {
    let checkbox = if item.completed { "[x] " } else { "[ ] " };
    let checkbox = Span::styled(checkbox, Style::default().fg(STATUS_OK));

    match state.editing.as_ref().filter(|edit| edit.id == item.id) {
        Some(edit) if edit.saving => Line::from(vec![
            checkbox,
            Span::styled(edit.buffer.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("  {} Saving...", spinner(animation_tick)),
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        Some(edit) => Line::from(vec![
            checkbox,
            Span::styled("✎ ", Style::default().fg(ACCENT)),
            Span::styled(
                format!("{}▏", edit.buffer),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(
                "  Enter: Save  Esc: Cancel",
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        None => {
            let text_style = if item.completed {
                Style::default()
                    .fg(MUTED_TEXT)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Line::from(vec![checkbox, Span::styled(item.text.clone(), text_style)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::todos::state::EditSession;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let lines = list_lines(&TodoListState::default(), 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn completed_item_is_checked() {
        let state = TodoListState {
            items: vec![TodoItem {
                id: 1,
                text: "Buy milk".into(),
                completed: true,
            }],
            ..TodoListState::default()
        };
        assert_eq!(line_text(&list_lines(&state, 0)[0]), "[x] Buy milk");
    }

    #[test]
    fn edited_item_shows_buffer() {
        let state = TodoListState {
            items: vec![TodoItem {
                id: 1,
                text: "old".into(),
                completed: false,
            }],
            editing: Some(EditSession {
                id: 1,
                buffer: "new".into(),
                saving: false,
            }),
            ..TodoListState::default()
        };
        let text = line_text(&list_lines(&state, 0)[0]);
        assert!(text.contains("new"));
        assert!(!text.contains("old"));
    }
}
