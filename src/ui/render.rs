use crate::nav::ALERT_ACK_LABEL;
use crate::ui::app::App;
use crate::ui::components::PopupDialog;
use crate::ui::footer::{screen_hints, Footer, ALERT_HINTS, HISTORY_HINTS};
use crate::ui::header::Header;
use crate::ui::history::render_history_dialog;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::screen_view::ScreenView;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MODAL_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Share of the body covered by a presented screen.
const MODAL_PERCENT_X: u16 = 80;
const MODAL_PERCENT_Y: u16 = 70;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let nav = app.navigation();

    frame.render_widget(Header::new().widget(&nav), header);
    frame.render_widget(Clear, body);

    if let Some(screen) = nav.top_screen() {
        frame.render_widget(
            ScreenView::new(screen, GLOBAL_BORDER).dimmed(nav.is_presenting()),
            body,
        );
    }

    if let Some(screen) = nav.presented_screen() {
        let modal = centered_rect(MODAL_PERCENT_X, MODAL_PERCENT_Y, body);
        frame.render_widget(Clear, modal);
        frame.render_widget(ScreenView::new(screen, MODAL_BORDER), modal);
    }

    let hints = if app.history_dialog().is_visible() {
        HISTORY_HINTS.to_string()
    } else if nav.alert().is_some() {
        ALERT_HINTS.to_string()
    } else {
        nav.visible_screen()
            .map(|screen| screen_hints(&screen.hints()))
            .unwrap_or_else(|| screen_hints(&[]))
    };
    frame.render_widget(Footer::new().widget(footer, &hints), footer);

    if let Some(alert) = nav.alert() {
        let button = Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                alert.message.as_str(),
                Style::default().fg(HEADER_TEXT),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(format!(" {} ", ALERT_ACK_LABEL), button))
                .alignment(Alignment::Center),
        ];
        PopupDialog::new(&alert.title, lines)
            .border_color(ACCENT)
            .render(frame, area);
    }

    render_history_dialog(frame, app.history_dialog());
}
