use crate::nav::TransitionRecord;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoryDialogState {
    #[default]
    Hidden,
    Visible {
        entries: Vec<TransitionRecord>,
        scroll_offset: usize,
    },
}

impl UiState for HistoryDialogState {}

impl HistoryDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(HistoryDialogState::default(), HistoryDialogState::Hidden);
    }

    #[test]
    fn is_visible_check() {
        assert!(!HistoryDialogState::Hidden.is_visible());
        assert!(HistoryDialogState::Visible {
            entries: vec![],
            scroll_offset: 0,
        }
        .is_visible());
    }
}
