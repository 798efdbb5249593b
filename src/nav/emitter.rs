//! Outward event channel from a view model to whoever handles its events.

use std::fmt;
use std::rc::Rc;

/// Single registered handler for the events of one screen.
///
/// Emitting is a direct, synchronous call into the handler. Nothing is
/// queued: one user action produces exactly one call.
pub struct Emitter<E> {
    handler: Rc<dyn Fn(E)>,
}

impl<E> Emitter<E> {
    pub fn new(handler: impl Fn(E) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Emitter that drops every event. Useful for previews and tests.
    pub fn detached() -> Self {
        Self::new(|_| {})
    }

    pub fn emit(&self, event: E) {
        (self.handler)(event);
    }
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").finish_non_exhaustive()
    }
}
