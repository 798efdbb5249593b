use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::POPUP_BORDER;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Bordered, centered overlay that sizes itself to its content.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    width: Option<u16>,
    border: Color,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            width: None,
            border: POPUP_BORDER,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    /// Outer size including borders.
    pub fn size(&self) -> (u16, u16) {
        let width = self.width.unwrap_or_else(|| {
            let content = self
                .lines
                .iter()
                .map(Line::width)
                .chain(std::iter::once(self.title.chars().count() + 2))
                .max()
                .unwrap_or(0);
            (content as u16).saturating_add(4)
        });
        let height = (self.lines.len() as u16).saturating_add(2);
        (width, height)
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let (width, height) = self.size();
        let rect = centered_rect_by_size(width, height, area);
        frame.render_widget(Clear, rect);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border));
        frame.render_widget(Paragraph::new(self.lines).block(block), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_fits_longest_line() {
        let dialog = PopupDialog::new("T", vec![Line::from("hello"), Line::from("hi")]);
        assert_eq!(dialog.size(), (9, 4));
    }

    #[test]
    fn fixed_width_wins() {
        let dialog = PopupDialog::new("Title", vec![Line::from("x")]).fixed_width(30);
        assert_eq!(dialog.size(), (30, 3));
    }
}
