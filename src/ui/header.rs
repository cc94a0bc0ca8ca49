use crate::ui::app::View;
use crate::ui::theme::{
    spinner, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation tabs plus the loading indicator.
pub struct Header {
    view: View,
    in_flight: usize,
    animation_tick: u8,
}

impl Header {
    pub fn new(view: View, in_flight: usize, animation_tick: u8) -> Self {
        Self {
            view,
            in_flight,
            animation_tick,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![Span::raw("  ")];
        spans.push(self.tab("F1", View::Registration));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(self.tab("F2", View::Todos));

        if self.in_flight > 0 {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} ", spinner(self.animation_tick)),
                Style::default().fg(STATUS_OK),
            ));
            spans.push(Span::styled(
                format!("Working ({})", self.in_flight),
                Style::default().fg(HEADER_TEXT),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn tab(&self, key: &str, view: View) -> Span<'static> {
        let label = format!(" {}: {} ", key, view.title());
        if view == self.view {
            Span::styled(
                label,
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(HEADER_TEXT))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(header: &Header) -> String {
        let line = Line::from(vec![
            header.tab("F1", View::Registration),
            header.tab("F2", View::Todos),
        ]);
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn tabs_name_both_views() {
        let header = Header::new(View::Todos, 0, 0);
        let text = text(&header);
        assert!(text.contains("Registration"));
        assert!(text.contains("Todo List"));
    }

    #[test]
    fn active_tab_is_bold() {
        let header = Header::new(View::Todos, 0, 0);
        let active = header.tab("F2", View::Todos);
        let inactive = header.tab("F1", View::Registration);
        assert!(active.style.add_modifier.contains(Modifier::BOLD));
        assert!(!inactive.style.add_modifier.contains(Modifier::BOLD));
    }
}
