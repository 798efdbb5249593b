use crate::config::Config;
use crate::nav::{AppCoordinator, Coordinator, Destination, NavigationStack};
use crate::ui::history::{HistoryDialogState, HistoryIntent, HistoryReducer};
use crate::ui::mvi::Reducer;
use crossterm::event::KeyEvent;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub type SharedCoordinator = Rc<RefCell<AppCoordinator<NavigationStack>>>;

pub struct App {
    should_quit: bool,
    coordinator: SharedCoordinator,
    /// State of the history dialog (MVI pattern).
    history_dialog: HistoryDialogState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let host = NavigationStack::new(config.history.max_entries);
        Self {
            should_quit: false,
            coordinator: AppCoordinator::new(host),
            history_dialog: HistoryDialogState::default(),
        }
    }

    pub fn start(&self, destination: Destination) {
        self.coordinator.borrow_mut().start(destination);
    }

    pub fn coordinator(&self) -> &SharedCoordinator {
        &self.coordinator
    }

    /// Read access to the navigation state. Must not be held across
    /// [`App::on_key`].
    pub fn navigation(&self) -> Ref<'_, NavigationStack> {
        Ref::map(self.coordinator.borrow(), |coordinator| coordinator.host())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Hand a key to the visible screen. Returns whether the screen had it
    /// wired.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        // The screen's view model calls back into the coordinator, so the
        // navigation borrow has to end before the key is delivered.
        let screen = self.navigation().visible_screen().cloned();
        match screen {
            Some(screen) => screen.handle_key(key),
            None => false,
        }
    }

    pub fn alert_visible(&self) -> bool {
        self.navigation().alert().is_some()
    }

    pub fn acknowledge_alert(&mut self) -> bool {
        self.coordinator.borrow_mut().host_mut().acknowledge_alert()
    }

    pub fn history_dialog(&self) -> &HistoryDialogState {
        &self.history_dialog
    }

    pub fn open_history(&mut self) {
        let entries = self.navigation().history().snapshot();
        self.dispatch_history(HistoryIntent::Load { entries });
    }

    pub fn dispatch_history(&mut self, intent: HistoryIntent) {
        dispatch_mvi!(self, history_dialog, HistoryReducer, intent);
    }
}
