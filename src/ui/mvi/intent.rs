//! Base trait for overlay intents.

/// Marker trait for intent objects: key presses and data loads aimed at an
/// overlay dialog. Reducers turn them into new states.
pub trait Intent: Send + 'static {}
