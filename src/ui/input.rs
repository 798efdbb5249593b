use crate::ui::app::App;
use crate::ui::history::HistoryIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press: global keys first, then whatever overlay is on top,
/// then the visible screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.history_dialog().is_visible() {
        match key.code {
            KeyCode::Esc => app.dispatch_history(HistoryIntent::Close),
            KeyCode::Up => app.dispatch_history(HistoryIntent::ScrollUp),
            KeyCode::Down => app.dispatch_history(HistoryIntent::ScrollDown),
            _ if is_history_key(key) => app.dispatch_history(HistoryIntent::Close),
            _ => {}
        }
        return;
    }

    // Alerts block everything but their acknowledgement.
    if app.alert_visible() {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('O')
        ) {
            app.acknowledge_alert();
        }
        return;
    }

    if is_history_key(key) {
        app.open_history();
        return;
    }

    if app.on_key(key) {
        return;
    }

    if matches!(key.code, KeyCode::Char('q')) && key.modifiers.is_empty() {
        app.request_quit();
    }
}

/// Ctrl+H, or plain `h` for terminals that report Ctrl+H as Backspace.
fn is_history_key(key: KeyEvent) -> bool {
    is_ctrl_char(key, 'h') || (key.code == KeyCode::Char('h') && key.modifiers.is_empty())
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
