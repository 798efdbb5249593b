//! Shared test utilities: a recording host and key builders.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use navstack::nav::{AppCoordinator, Coordinator, NavigationStack, PresentationHost};
use navstack::screens::{ChildViewModel, MainViewModel, Screen, ScreenKind};
use std::cell::RefCell;
use std::rc::Rc;

/// One call made on a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Push(ScreenKind),
    Present(ScreenKind),
    Dismiss,
    Pop,
    ShowAlert { title: String, message: String },
}

/// Host that keeps a minimal stack and records every primitive it receives,
/// including ones that end up being no-ops.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub stack: Vec<Screen>,
    pub presented: Option<Screen>,
}

impl RecordingHost {
    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn top(&self) -> Option<Screen> {
        self.stack.last().cloned()
    }
}

impl PresentationHost for RecordingHost {
    fn depth(&self) -> usize {
        self.stack.len()
    }

    fn push(&mut self, screen: Screen) {
        self.calls.push(HostCall::Push(screen.kind()));
        self.stack.push(screen);
    }

    fn present(&mut self, screen: Screen) {
        self.calls.push(HostCall::Present(screen.kind()));
        self.presented = Some(screen);
    }

    fn dismiss(&mut self) {
        self.calls.push(HostCall::Dismiss);
        self.presented = None;
    }

    fn pop(&mut self) {
        self.calls.push(HostCall::Pop);
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn show_alert(&mut self, title: &str, message: &str) {
        self.calls.push(HostCall::ShowAlert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

pub type Shared<H> = Rc<RefCell<AppCoordinator<H>>>;

/// Visible screen of a running navigation stack, cloned so the coordinator
/// is not borrowed while the screen is driven.
pub fn visible_screen(coordinator: &Shared<NavigationStack>) -> Screen {
    coordinator
        .borrow()
        .host()
        .visible_screen()
        .cloned()
        .expect("navigation has a visible screen")
}

pub fn main_view_model(screen: &Screen) -> MainViewModel {
    match screen {
        Screen::Main(main) => main.view_model().clone(),
        other => panic!("expected main screen, got {:?}", other.kind()),
    }
}

pub fn child_view_model(screen: &Screen) -> ChildViewModel {
    match screen {
        Screen::Child(child) => child.view_model().clone(),
        other => panic!("expected child screen, got {:?}", other.kind()),
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press_char(ch: char) -> KeyEvent {
    press_key(KeyCode::Char(ch))
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
