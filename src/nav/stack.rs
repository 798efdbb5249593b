use crate::nav::history::{Transition, TransitionLog};
use crate::nav::host::{Alert, PresentationHost};
use crate::screens::{Screen, ScreenKind};

/// In-memory navigation state: the root stack, at most one modal context
/// (itself a stack) and at most one alert.
///
/// This is the host the terminal UI renders. Screens dropped from it take
/// their view models with them.
#[derive(Debug, Default)]
pub struct NavigationStack {
    stack: Vec<Screen>,
    modal: Option<Vec<Screen>>,
    alert: Option<Alert>,
    history: TransitionLog,
}

impl NavigationStack {
    pub fn new(history_limit: usize) -> Self {
        Self {
            history: TransitionLog::new(history_limit),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn stack_kinds(&self) -> Vec<ScreenKind> {
        self.stack.iter().map(Screen::kind).collect()
    }

    pub fn modal_kinds(&self) -> Vec<ScreenKind> {
        self.modal
            .as_ref()
            .map(|context| context.iter().map(Screen::kind).collect())
            .unwrap_or_default()
    }

    pub fn stack_titles(&self) -> Vec<&str> {
        self.stack.iter().map(Screen::title).collect()
    }

    pub fn is_presenting(&self) -> bool {
        self.modal.is_some()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Top of the root stack, whether or not a modal covers it.
    pub fn top_screen(&self) -> Option<&Screen> {
        self.stack.last()
    }

    /// Top of the modal context, if one is active.
    pub fn presented_screen(&self) -> Option<&Screen> {
        self.modal.as_ref().and_then(|context| context.last())
    }

    /// The screen the user is looking at: top of the modal context when one
    /// is active, otherwise top of the root stack.
    pub fn visible_screen(&self) -> Option<&Screen> {
        match &self.modal {
            Some(context) => context.last(),
            None => self.stack.last(),
        }
    }

    /// Close the visible alert through its acknowledgement action.
    pub fn acknowledge_alert(&mut self) -> bool {
        if self.alert.take().is_none() {
            return false;
        }
        tracing::debug!("alert acknowledged");
        self.history.record(Transition::AlertAcknowledged);
        true
    }

    pub fn history(&self) -> &TransitionLog {
        &self.history
    }
}

impl PresentationHost for NavigationStack {
    fn depth(&self) -> usize {
        self.stack.len()
    }

    fn push(&mut self, screen: Screen) {
        let kind = screen.kind();
        self.stack.push(screen);
        tracing::debug!(%kind, depth = self.stack.len(), "push");
        self.history.record(Transition::Push(kind));
    }

    fn present(&mut self, screen: Screen) {
        let kind = screen.kind();
        if self.modal.is_some() || self.alert.is_some() {
            tracing::warn!(%kind, "present ignored: a presentation is already active");
            return;
        }
        self.modal = Some(vec![screen]);
        tracing::debug!(%kind, "present");
        self.history.record(Transition::Present(kind));
    }

    fn dismiss(&mut self) {
        let Some(context) = self.modal.take() else {
            tracing::debug!("dismiss ignored: nothing presented");
            return;
        };
        let Some(kind) = context.first().map(Screen::kind) else {
            return;
        };
        tracing::debug!(%kind, "dismiss");
        self.history.record(Transition::Dismiss(kind));
    }

    fn pop(&mut self) {
        if self.stack.len() <= 1 {
            tracing::debug!(depth = self.stack.len(), "pop ignored: at root");
            return;
        }
        let Some(screen) = self.stack.pop() else {
            return;
        };
        let kind = screen.kind();
        tracing::debug!(%kind, depth = self.stack.len(), "pop");
        self.history.record(Transition::Pop(kind));
    }

    fn show_alert(&mut self, title: &str, message: &str) {
        if self.alert.is_some() {
            tracing::warn!(title, "alert ignored: another alert is visible");
            return;
        }
        self.alert = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
        tracing::debug!(title, "alert");
        self.history.record(Transition::Alert {
            title: title.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Emitter;
    use crate::screens::{ChildViewModel, MainViewModel, PresentationType};

    fn main_screen() -> Screen {
        Screen::main(MainViewModel::new(Emitter::detached()))
    }

    fn child_screen(presentation: PresentationType) -> Screen {
        Screen::child(ChildViewModel::new(presentation, Emitter::detached()))
    }

    #[test]
    fn pop_at_root_is_noop() {
        let mut nav = NavigationStack::default();
        nav.push(main_screen());
        nav.pop();
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn pop_on_empty_stack_is_noop() {
        let mut nav = NavigationStack::default();
        nav.pop();
        assert!(nav.is_empty());
        assert!(nav.history().is_empty());
    }

    #[test]
    fn dismiss_without_modal_is_noop() {
        let mut nav = NavigationStack::default();
        nav.push(main_screen());
        nav.dismiss();
        assert!(!nav.is_presenting());
        assert_eq!(nav.history().last(), Some(&Transition::Push(ScreenKind::Main)));
    }

    #[test]
    fn modal_covers_root_stack() {
        let mut nav = NavigationStack::default();
        nav.push(main_screen());
        nav.present(child_screen(PresentationType::Presented));

        assert_eq!(nav.stack_kinds(), vec![ScreenKind::Main]);
        assert_eq!(
            nav.visible_screen().map(Screen::kind),
            Some(ScreenKind::Child(PresentationType::Presented))
        );

        nav.dismiss();
        assert_eq!(nav.visible_screen().map(Screen::kind), Some(ScreenKind::Main));
        assert!(nav.modal_kinds().is_empty());
    }

    #[test]
    fn second_present_is_ignored() {
        let mut nav = NavigationStack::default();
        nav.push(main_screen());
        nav.present(child_screen(PresentationType::Presented));
        nav.present(child_screen(PresentationType::Presented));
        assert_eq!(nav.modal_kinds().len(), 1);
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn present_is_ignored_while_alert_is_visible() {
        let mut nav = NavigationStack::default();
        nav.show_alert("Title", "Body");
        nav.present(child_screen(PresentationType::Presented));

        assert!(!nav.is_presenting());
        assert!(nav.presented_screen().is_none());
        let recorded: Vec<_> = nav.history().transitions().cloned().collect();
        assert_eq!(
            recorded,
            vec![Transition::Alert {
                title: "Title".to_string()
            }]
        );
    }

    #[test]
    fn alert_is_acknowledged_once() {
        let mut nav = NavigationStack::default();
        nav.show_alert("Title", "Body");
        nav.show_alert("Other", "Ignored");
        assert_eq!(nav.alert().map(|a| a.title.as_str()), Some("Title"));

        assert!(nav.acknowledge_alert());
        assert!(!nav.acknowledge_alert());
        assert_eq!(nav.history().last(), Some(&Transition::AlertAcknowledged));
    }
}
