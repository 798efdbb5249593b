use crate::nav::TransitionRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HistoryIntent {
    /// Open the dialog with a fresh snapshot, scrolled to the newest entries.
    Load { entries: Vec<TransitionRecord> },
    Close,
    ScrollUp,
    ScrollDown,
}

impl Intent for HistoryIntent {}
