//! Rendering of the registration form.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::field::FieldState;
use crate::ui::registration::state::RegistrationState;
use crate::ui::theme::{
    spinner, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use crate::validation::FieldId;

/// Widest the form gets; it is centered in wider bodies.
const FORM_WIDTH: u16 = 64;

pub fn render_registration(
    frame: &mut Frame,
    area: Rect,
    state: &RegistrationState,
    animation_tick: u8,
) {
    let area = centered_column(area, FORM_WIDTH);
    let block = Block::default()
        .title(Span::styled(
            " Create account ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|id| Constraint::Length(field_height(state, *id)))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (id, row) in FieldId::ALL.iter().zip(rows.iter()) {
        render_field(frame, *row, state, *id);
    }
    frame.render_widget(
        Paragraph::new(submit_line(state, animation_tick)),
        rows[FieldId::ALL.len()],
    );
}

/// Label + bordered input + one line per visible error.
fn field_height(state: &RegistrationState, id: FieldId) -> u16 {
    1 + 3 + state.visible_errors(id).len() as u16
}

fn render_field(frame: &mut Frame, area: Rect, state: &RegistrationState, id: FieldId) {
    let field = state.field(id);
    let forced = state.forced();
    let value = state.data.value(id);

    let label = Paragraph::new(Line::from(Span::styled(
        field.label(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(label, Rect { height: 1u16.min(area.height), ..area });

    let input_area = Rect {
        y: area.y.saturating_add(1),
        height: 3u16.min(area.height.saturating_sub(1)),
        ..area
    };
    let border = border_style(field, forced);
    let content = if value.is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(field.display_value(value), Style::default().fg(HEADER_TEXT))
    };
    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, input_area);

    if field.is_focused() && input_area.height >= 3 {
        let typed = value.chars().count() as u16;
        let x = input_area.x + 1 + typed.min(input_area.width.saturating_sub(3));
        frame.set_cursor_position(Position::new(x, input_area.y + 1));
    }

    let errors: Vec<Line> = field
        .visible_errors(forced)
        .iter()
        .map(|message| {
            Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(STATUS_ERROR),
            ))
        })
        .collect();
    if !errors.is_empty() {
        let errors_area = Rect {
            y: input_area.y.saturating_add(input_area.height),
            height: area.height.saturating_sub(1 + input_area.height),
            ..area
        };
        frame.render_widget(Paragraph::new(errors), errors_area);
    }
}

fn border_style(field: &FieldState, forced: bool) -> Style {
    if field.shows_error(forced) {
        Style::default().fg(STATUS_ERROR)
    } else if field.is_focused() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}

fn submit_line(state: &RegistrationState, animation_tick: u8) -> Line<'static> {
    if state.is_submitting() {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(" {} Registering... ", spinner(animation_tick)),
                Style::default()
                    .fg(MUTED_TEXT)
                    .bg(ACTIVE_HIGHLIGHT),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                " Register ",
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", Style::default().fg(MUTED_TEXT)),
        ])
    }
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
