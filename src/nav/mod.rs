//! Coordinator-driven navigation.
//!
//! ```text
//! key ──→ Screen ──→ ViewModel ──emit──→ AppCoordinator ──→ PresentationHost
//!                        ↑                     │
//!                        └──── builds & binds ─┘
//! ```
//!
//! View models know nothing about navigation; they emit typed events through
//! an [`Emitter`]. The coordinator owns the host and decides what each event
//! means.

mod app_coordinator;
mod coordinator;
mod emitter;
mod history;
mod host;
mod stack;

pub use app_coordinator::{
    AppCoordinator, Destination, ParseDestinationError, ALERT_MESSAGE, ALERT_TITLE,
};
pub use coordinator::Coordinator;
pub use emitter::Emitter;
pub use history::{Transition, TransitionLog, TransitionRecord, DEFAULT_HISTORY_LIMIT};
pub use host::{Alert, PresentationHost, ALERT_ACK_LABEL};
pub use stack::NavigationStack;
