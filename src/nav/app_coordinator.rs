use crate::nav::coordinator::Coordinator;
use crate::nav::emitter::Emitter;
use crate::nav::host::PresentationHost;
use crate::screens::{
    ChildEvent, ChildViewModel, MainEvent, MainViewModel, PresentationType, Screen,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;
use thiserror::Error;

pub const ALERT_TITLE: &str = "Dummy Alert";
pub const ALERT_MESSAGE: &str = "Dummy message for alert";

/// Where the application coordinator starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    #[default]
    #[serde(alias = "root")]
    RootView,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown destination '{0}' (expected: root_view)")]
pub struct ParseDestinationError(String);

impl FromStr for Destination {
    type Err = ParseDestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "root_view" | "root" => Ok(Destination::RootView),
            other => Err(ParseDestinationError(other.to_string())),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::RootView => write!(f, "root_view"),
        }
    }
}

/// Top-level coordinator: owns the host and routes main/child screen events.
///
/// It is always shared as `Rc<RefCell<_>>` because every view model it
/// creates holds an emitter that calls back into it. Those emitters only
/// keep a weak reference, so dropping the coordinator never leaks through
/// screens still on the stack.
pub struct AppCoordinator<H> {
    host: H,
    this: Weak<RefCell<Self>>,
}

impl<H: PresentationHost + 'static> AppCoordinator<H> {
    pub fn new(host: H) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|this| {
            RefCell::new(Self {
                host,
                this: this.clone(),
            })
        })
    }

    pub fn handle_main_event(&mut self, event: MainEvent) {
        tracing::debug!(?event, "main event");
        match event {
            MainEvent::PushChildRequested => {
                let screen = self.child_screen(PresentationType::Pushed);
                self.push_screen(screen);
            }
            MainEvent::PresentChildRequested => {
                let screen = self.child_screen(PresentationType::Presented);
                self.present_screen(screen);
            }
            MainEvent::ShowAlertRequested => self.show_alert(ALERT_TITLE, ALERT_MESSAGE),
        }
    }

    pub fn handle_child_event(&mut self, event: ChildEvent) {
        tracing::debug!(?event, "child event");
        match event {
            ChildEvent::DoneRequested | ChildEvent::CancelRequested => self.dismiss(),
            ChildEvent::BackRequested => self.pop_screen(),
        }
    }

    fn main_screen(&self) -> Screen {
        Screen::main(MainViewModel::new(self.emitter(Self::handle_main_event)))
    }

    fn child_screen(&self, presentation_type: PresentationType) -> Screen {
        Screen::child(ChildViewModel::new(
            presentation_type,
            self.emitter(Self::handle_child_event),
        ))
    }

    /// Emitter that forwards into `handler` on this coordinator.
    fn emitter<E: fmt::Debug + 'static>(&self, handler: fn(&mut Self, E)) -> Emitter<E> {
        let this = self.this.clone();
        Emitter::new(move |event: E| {
            let Some(shared) = this.upgrade() else {
                tracing::debug!(?event, "event dropped: coordinator is gone");
                return;
            };
            // Only happens if a view model is driven from inside a handler.
            let Ok(mut coordinator) = shared.try_borrow_mut() else {
                tracing::warn!(?event, "event dropped: coordinator is busy");
                return;
            };
            handler(&mut *coordinator, event);
        })
    }
}

impl<H: PresentationHost + 'static> Coordinator for AppCoordinator<H> {
    type Destination = Destination;
    type Host = H;

    fn host(&self) -> &H {
        &self.host
    }

    fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn start(&mut self, destination: Destination) {
        if self.host.depth() > 0 {
            tracing::warn!(%destination, "start ignored: navigation already started");
            return;
        }
        tracing::info!(%destination, "starting navigation");
        match destination {
            Destination::RootView => {
                let screen = self.main_screen();
                self.push_screen(screen);
            }
        }
    }
}
