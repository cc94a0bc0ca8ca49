use crate::ui::app::{App, View};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::registration::view::render_registration;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_OK};
use crate::ui::todos::view::render_todos;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.view(), app.in_flight(), app.animation_tick());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match app.view() {
        View::Registration => {
            render_registration(frame, body, app.registration(), app.animation_tick())
        }
        View::Todos => render_todos(frame, body, app.todos(), app.animation_tick()),
    }

    let footer_widget = Footer::new(app.view());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(message) = app.popup_message() {
        render_popup(frame, body, message);
    }
}

/// Acknowledgment overlay, closed by any key.
fn render_popup(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(STATUS_OK)),
            Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(8).max(30);
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            " Notice ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
