use crate::screens::Hint;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const GLOBAL_HINTS: &str = "h: History │ q: Quit";
pub const ALERT_HINTS: &str = "Enter: OK";
pub const HISTORY_HINTS: &str = "↑/↓: Scroll │ Esc: Close";

/// Key hints for a screen followed by the global keys.
pub fn screen_hints(hints: &[Hint]) -> String {
    let mut parts: Vec<String> = hints
        .iter()
        .map(|hint| format!("{}: {}", hint.key, hint.label))
        .collect();
    parts.push(GLOBAL_HINTS.to_string());
    parts.join(" │ ")
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, hints: &str) -> Paragraph<'static> {
        let hints = format!(" {}", hints);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: hints contain box-drawing characters.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::Slot;

    #[test]
    fn screen_hints_end_with_global_keys() {
        let hints = [Hint {
            key: 'b',
            label: "Back",
            slot: Slot::Leading,
        }];
        assert_eq!(screen_hints(&hints), "b: Back │ h: History │ q: Quit");
    }
}
