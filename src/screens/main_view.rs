use crate::nav::Emitter;
use crate::screens::{Binding, Slot};

/// Intents raised by the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainEvent {
    PushChildRequested,
    PresentChildRequested,
    ShowAlertRequested,
}

#[derive(Debug, Clone)]
pub struct MainViewModel {
    navigation_title: &'static str,
    emitter: Emitter<MainEvent>,
}

impl MainViewModel {
    pub fn new(emitter: Emitter<MainEvent>) -> Self {
        Self {
            navigation_title: "Main View",
            emitter,
        }
    }

    pub fn navigation_title(&self) -> &str {
        self.navigation_title
    }

    pub fn push_child_tapped(&self) {
        self.emitter.emit(MainEvent::PushChildRequested);
    }

    pub fn present_child_tapped(&self) {
        self.emitter.emit(MainEvent::PresentChildRequested);
    }

    pub fn show_alert_tapped(&self) {
        self.emitter.emit(MainEvent::ShowAlertRequested);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    PushChild,
    PresentChild,
    ShowAlert,
}

static MAIN_BINDINGS: [Binding<MainAction>; 3] = [
    Binding {
        key: 'p',
        label: "Push Child View",
        slot: Slot::Body,
        action: MainAction::PushChild,
    },
    Binding {
        key: 'm',
        label: "Present Child View",
        slot: Slot::Body,
        action: MainAction::PresentChild,
    },
    Binding {
        key: 'a',
        label: "Show Alert",
        slot: Slot::Body,
        action: MainAction::ShowAlert,
    },
];

/// Root screen: three buttons, no navigation-bar items.
#[derive(Debug, Clone)]
pub struct MainScreen {
    view_model: MainViewModel,
}

impl MainScreen {
    pub fn new(view_model: MainViewModel) -> Self {
        Self { view_model }
    }

    pub fn view_model(&self) -> &MainViewModel {
        &self.view_model
    }

    pub fn bindings(&self) -> &'static [Binding<MainAction>] {
        &MAIN_BINDINGS
    }

    pub fn trigger(&self, action: MainAction) {
        match action {
            MainAction::PushChild => self.view_model.push_child_tapped(),
            MainAction::PresentChild => self.view_model.present_child_tapped(),
            MainAction::ShowAlert => self.view_model.show_alert_tapped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_view_model() -> (MainViewModel, Rc<RefCell<Vec<MainEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let vm = MainViewModel::new(Emitter::new(move |event| sink.borrow_mut().push(event)));
        (vm, events)
    }

    #[test]
    fn each_tap_emits_exactly_one_event() {
        let (vm, events) = recording_view_model();
        vm.push_child_tapped();
        vm.present_child_tapped();
        vm.show_alert_tapped();
        assert_eq!(
            *events.borrow(),
            vec![
                MainEvent::PushChildRequested,
                MainEvent::PresentChildRequested,
                MainEvent::ShowAlertRequested,
            ]
        );
    }

    #[test]
    fn navigation_title_is_fixed() {
        let vm = MainViewModel::new(Emitter::detached());
        assert_eq!(vm.navigation_title(), "Main View");
    }

    #[test]
    fn every_binding_triggers_its_event() {
        let (vm, events) = recording_view_model();
        let screen = MainScreen::new(vm);
        for binding in screen.bindings() {
            screen.trigger(binding.action);
        }
        assert_eq!(events.borrow().len(), 3);
    }
}
