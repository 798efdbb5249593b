use crate::screens::{Hint, Screen, Slot};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Draws one screen: navigation bar (leading items, title, trailing items)
/// above its body.
pub struct ScreenView<'a> {
    screen: &'a Screen,
    border: Color,
    dimmed: bool,
}

impl<'a> ScreenView<'a> {
    pub fn new(screen: &'a Screen, border: Color) -> Self {
        Self {
            screen,
            border,
            dimmed: false,
        }
    }

    /// Render as covered by a presentation.
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

impl Widget for ScreenView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut text_style = Style::default().fg(HEADER_TEXT);
        if self.dimmed {
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let hints = self.screen.hints();
        let bar = Rect { height: 1, ..inner };
        Paragraph::new(bar_items(&hints, Slot::Leading))
            .alignment(Alignment::Left)
            .render(bar, buf);
        Paragraph::new(Span::styled(
            self.screen.title().to_string(),
            text_style.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(bar, buf);
        Paragraph::new(bar_items(&hints, Slot::Trailing))
            .alignment(Alignment::Right)
            .render(bar, buf);

        if inner.height < 2 {
            return;
        }
        let separator = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        Paragraph::new(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(HEADER_SEPARATOR),
        ))
        .render(separator, buf);

        let content = Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        };
        let mut lines = Vec::new();
        if let Some(label) = self.screen.label() {
            lines.push(Line::from(Span::styled(label.to_string(), text_style)));
        }
        for hint in hints.iter().filter(|hint| hint.slot == Slot::Body) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" [{}] {} ", hint.key, hint.label),
                text_style.bg(ACTIVE_HIGHLIGHT),
            )));
        }
        let top_padding = content.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect {
            y: content.y + top_padding,
            height: content.height.saturating_sub(top_padding),
            ..content
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);
    }
}

fn bar_items(hints: &[Hint], slot: Slot) -> Line<'static> {
    let mut spans = Vec::new();
    for hint in hints.iter().filter(|hint| hint.slot == slot) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}] {}", hint.key, hint.label),
            Style::default().fg(ACCENT),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
