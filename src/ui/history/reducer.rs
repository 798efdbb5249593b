use crate::ui::history::intent::HistoryIntent;
use crate::ui::history::state::HistoryDialogState;
use crate::ui::mvi::Reducer;

/// Rows shown at once; the rest is reachable by scrolling.
pub const MAX_VISIBLE_ROWS: usize = 10;

pub struct HistoryReducer;

impl Reducer for HistoryReducer {
    type State = HistoryDialogState;
    type Intent = HistoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HistoryIntent::Load { entries } => {
                let scroll_offset = max_offset(entries.len());
                HistoryDialogState::Visible {
                    entries,
                    scroll_offset,
                }
            }
            HistoryIntent::Close => HistoryDialogState::Hidden,
            HistoryIntent::ScrollUp => match state {
                HistoryDialogState::Visible {
                    entries,
                    scroll_offset,
                } => HistoryDialogState::Visible {
                    entries,
                    scroll_offset: scroll_offset.saturating_sub(1),
                },
                other => other,
            },
            HistoryIntent::ScrollDown => match state {
                HistoryDialogState::Visible {
                    entries,
                    scroll_offset,
                } => {
                    let scroll_offset = (scroll_offset + 1).min(max_offset(entries.len()));
                    HistoryDialogState::Visible {
                        entries,
                        scroll_offset,
                    }
                }
                other => other,
            },
        }
    }
}

fn max_offset(len: usize) -> usize {
    len.saturating_sub(MAX_VISIBLE_ROWS)
}
