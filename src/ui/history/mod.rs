//! Navigation history overlay (MVI).
//!
//! Shows the transitions recorded by the navigation stack, newest last.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_history_dialog;
pub use intent::HistoryIntent;
pub use reducer::{HistoryReducer, MAX_VISIBLE_ROWS};
pub use state::HistoryDialogState;
