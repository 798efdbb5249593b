use crate::nav::NavigationStack;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Breadcrumb of the root stack, plus the presented screen if any.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, nav: &NavigationStack) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (idx, title) in nav.stack_titles().into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" › ", separator_style));
            }
            spans.push(Span::styled(title.to_string(), text_style));
        }
        if let Some(screen) = nav.presented_screen() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("presented: {}", screen.title()),
                Style::default().fg(ACCENT),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
