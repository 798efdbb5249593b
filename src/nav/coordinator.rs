use crate::nav::host::PresentationHost;
use crate::screens::Screen;

/// Owner of a navigation host that turns screen events into navigation.
///
/// The navigation helpers are written once here against the host; concrete
/// coordinators only decide *which* helper to call for each event.
pub trait Coordinator {
    type Destination;
    type Host: PresentationHost;

    fn host(&self) -> &Self::Host;

    fn host_mut(&mut self) -> &mut Self::Host;

    /// Show the first screen for `destination`.
    fn start(&mut self, destination: Self::Destination);

    fn push_screen(&mut self, screen: Screen) {
        self.host_mut().push(screen);
    }

    fn present_screen(&mut self, screen: Screen) {
        self.host_mut().present(screen);
    }

    fn dismiss(&mut self) {
        self.host_mut().dismiss();
    }

    fn pop_screen(&mut self) {
        self.host_mut().pop();
    }

    fn show_alert(&mut self, title: &str, message: &str) {
        self.host_mut().show_alert(title, message);
    }
}
