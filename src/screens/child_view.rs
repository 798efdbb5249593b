use crate::nav::Emitter;
use crate::screens::{Binding, Slot};

/// How the child screen was reached. Decides which way back it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationType {
    Pushed,
    Presented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildEvent {
    DoneRequested,
    CancelRequested,
    BackRequested,
}

#[derive(Debug, Clone)]
pub struct ChildViewModel {
    view_title: &'static str,
    presentation_type: PresentationType,
    emitter: Emitter<ChildEvent>,
}

impl ChildViewModel {
    pub fn new(presentation_type: PresentationType, emitter: Emitter<ChildEvent>) -> Self {
        Self {
            view_title: "Child View",
            presentation_type,
            emitter,
        }
    }

    pub fn view_title(&self) -> &str {
        self.view_title
    }

    pub fn presentation_type(&self) -> PresentationType {
        self.presentation_type
    }

    pub fn done_tapped(&self) {
        self.emitter.emit(ChildEvent::DoneRequested);
    }

    pub fn cancel_tapped(&self) {
        self.emitter.emit(ChildEvent::CancelRequested);
    }

    pub fn back_tapped(&self) {
        self.emitter.emit(ChildEvent::BackRequested);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildAction {
    Back,
    Done,
    Cancel,
}

static PUSHED_BINDINGS: [Binding<ChildAction>; 1] = [Binding {
    key: 'b',
    label: "Back",
    slot: Slot::Leading,
    action: ChildAction::Back,
}];

static PRESENTED_BINDINGS: [Binding<ChildAction>; 2] = [
    Binding {
        key: 'c',
        label: "Cancel",
        slot: Slot::Leading,
        action: ChildAction::Cancel,
    },
    Binding {
        key: 'd',
        label: "Done",
        slot: Slot::Trailing,
        action: ChildAction::Done,
    },
];

/// Child screen. Its navigation-bar items depend on the presentation type,
/// so a pushed child can only go back and a presented one can only be
/// dismissed.
#[derive(Debug, Clone)]
pub struct ChildScreen {
    view_model: ChildViewModel,
}

impl ChildScreen {
    pub fn new(view_model: ChildViewModel) -> Self {
        Self { view_model }
    }

    pub fn view_model(&self) -> &ChildViewModel {
        &self.view_model
    }

    pub fn bindings(&self) -> &'static [Binding<ChildAction>] {
        match self.view_model.presentation_type() {
            PresentationType::Pushed => &PUSHED_BINDINGS,
            PresentationType::Presented => &PRESENTED_BINDINGS,
        }
    }

    pub fn trigger(&self, action: ChildAction) {
        match action {
            ChildAction::Back => self.view_model.back_tapped(),
            ChildAction::Done => self.view_model.done_tapped(),
            ChildAction::Cancel => self.view_model.cancel_tapped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(screen: &ChildScreen) -> Vec<ChildAction> {
        screen.bindings().iter().map(|b| b.action).collect()
    }

    #[test]
    fn pushed_child_only_offers_back() {
        let screen = ChildScreen::new(ChildViewModel::new(
            PresentationType::Pushed,
            Emitter::detached(),
        ));
        assert_eq!(actions(&screen), vec![ChildAction::Back]);
        assert_eq!(screen.bindings()[0].slot, Slot::Leading);
    }

    #[test]
    fn presented_child_offers_cancel_and_done() {
        let screen = ChildScreen::new(ChildViewModel::new(
            PresentationType::Presented,
            Emitter::detached(),
        ));
        assert_eq!(actions(&screen), vec![ChildAction::Cancel, ChildAction::Done]);
    }

    #[test]
    fn view_title_is_fixed() {
        let vm = ChildViewModel::new(PresentationType::Pushed, Emitter::detached());
        assert_eq!(vm.view_title(), "Child View");
    }
}
