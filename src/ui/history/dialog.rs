use crate::ui::components::PopupDialog;
use crate::ui::history::reducer::MAX_VISIBLE_ROWS;
use crate::ui::history::state::HistoryDialogState;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;
use std::time::SystemTime;

const DIALOG_WIDTH: u16 = 50;
const DIALOG_TITLE: &str = "Navigation History (UTC)";

pub fn render_history_dialog(frame: &mut Frame, state: &HistoryDialogState) {
    let HistoryDialogState::Visible {
        entries,
        scroll_offset,
    } = state
    else {
        return;
    };

    let inner_width = DIALOG_WIDTH.saturating_sub(2) as usize;

    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from(Span::styled(
            " No navigation yet",
            Style::default().fg(HEADER_SEPARATOR),
        ))]
    } else {
        entries
            .iter()
            .skip(*scroll_offset)
            .take(MAX_VISIBLE_ROWS)
            .map(|entry| {
                let description = entry.transition.to_string();
                let time = format_time(entry.timestamp);
                let padding = inner_width
                    .saturating_sub(description.chars().count())
                    .saturating_sub(time.len())
                    .saturating_sub(2);
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(description, Style::default().fg(HEADER_TEXT)),
                    Span::raw(" ".repeat(padding.max(1))),
                    Span::styled(time, Style::default().fg(HEADER_SEPARATOR)),
                    Span::raw(" "),
                ])
            })
            .collect()
    };

    let area = frame.area();
    PopupDialog::new(DIALOG_TITLE, lines)
        .fixed_width(DIALOG_WIDTH)
        .render(frame, area);
}

/// `HH:MM:SS` in UTC.
fn format_time(timestamp: SystemTime) -> String {
    let secs = timestamp
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Transition, TransitionRecord};
    use crate::screens::ScreenKind;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn render_text(state: &HistoryDialogState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_history_dialog(frame, state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn title_names_the_time_zone() {
        let state = HistoryDialogState::Visible {
            entries: vec![TransitionRecord {
                timestamp: SystemTime::UNIX_EPOCH + Duration::from_secs(3_723),
                transition: Transition::Push(ScreenKind::Main),
            }],
            scroll_offset: 0,
        };
        let text = render_text(&state);
        assert!(text.contains("Navigation History (UTC)"));
        assert!(text.contains("Push Main View"));
        assert!(text.contains("01:02:03"));
    }

    #[test]
    fn hidden_dialog_draws_nothing() {
        let text = render_text(&HistoryDialogState::Hidden);
        assert!(text.trim().is_empty());
    }

    #[test]
    fn format_time_wraps_at_midnight() {
        let ts = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 + 3_661);
        assert_eq!(format_time(ts), "01:01:01");
    }
}
