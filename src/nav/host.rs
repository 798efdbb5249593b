use crate::screens::Screen;

/// Title of the single acknowledgement action every alert carries.
pub const ALERT_ACK_LABEL: &str = "OK";

/// Informational dialog with a single acknowledgement action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Navigation primitives offered by whatever actually shows screens.
///
/// None of these can fail from the caller's point of view: a request that
/// makes no sense in the current state (dismiss with nothing presented, pop
/// at the root) is a no-op.
pub trait PresentationHost {
    /// Number of screens on the navigation stack, modal contexts excluded.
    fn depth(&self) -> usize;

    /// Append to the navigation stack.
    fn push(&mut self, screen: Screen);

    /// Show modally, wrapped in its own navigation context.
    fn present(&mut self, screen: Screen);

    /// Close the current modal context.
    fn dismiss(&mut self);

    /// Remove the top of the navigation stack.
    fn pop(&mut self);

    /// Show a blocking informational dialog.
    fn show_alert(&mut self, title: &str, message: &str);
}
