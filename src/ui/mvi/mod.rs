//! Model-View-Intent (MVI) primitives for overlay dialogs.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Navigation itself does not go through here: screens and their view models
//! talk to the coordinator. MVI is used for UI-local overlays such as the
//! history dialog, whose state never affects the navigation stack.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
