//! Screens and their view models.
//!
//! A screen is built by an explicit factory from its view model. It maps key
//! presses onto view-model methods and nothing else: where the user ends up
//! afterwards is decided by whoever handles the view model's events.

mod child_view;
mod main_view;

pub use child_view::{ChildAction, ChildEvent, ChildScreen, ChildViewModel, PresentationType};
pub use main_view::{MainAction, MainEvent, MainScreen, MainViewModel};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;

/// Where an action is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Left side of the navigation bar.
    Leading,
    /// Right side of the navigation bar.
    Trailing,
    /// Button in the screen body.
    Body,
}

/// A key wired to a screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<A> {
    pub key: char,
    pub label: &'static str,
    pub slot: Slot,
    pub action: A,
}

/// Action-agnostic view of a binding, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub key: char,
    pub label: &'static str,
    pub slot: Slot,
}

impl<A> From<&Binding<A>> for Hint {
    fn from(binding: &Binding<A>) -> Self {
        Self {
            key: binding.key,
            label: binding.label,
            slot: binding.slot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Main,
    Child(PresentationType),
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenKind::Main => write!(f, "Main View"),
            ScreenKind::Child(PresentationType::Pushed) => write!(f, "Child View (pushed)"),
            ScreenKind::Child(PresentationType::Presented) => {
                write!(f, "Child View (presented)")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Screen {
    Main(MainScreen),
    Child(ChildScreen),
}

impl Screen {
    pub fn main(view_model: MainViewModel) -> Self {
        Self::Main(MainScreen::new(view_model))
    }

    pub fn child(view_model: ChildViewModel) -> Self {
        Self::Child(ChildScreen::new(view_model))
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Main(_) => ScreenKind::Main,
            Self::Child(screen) => ScreenKind::Child(screen.view_model().presentation_type()),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Main(screen) => screen.view_model().navigation_title(),
            Self::Child(screen) => screen.view_model().view_title(),
        }
    }

    /// Text shown in the middle of the body, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Main(_) => None,
            Self::Child(screen) => Some(screen.view_model().view_title()),
        }
    }

    pub fn hints(&self) -> Vec<Hint> {
        match self {
            Self::Main(screen) => screen.bindings().iter().map(Hint::from).collect(),
            Self::Child(screen) => screen.bindings().iter().map(Hint::from).collect(),
        }
    }

    /// Route a key press to the matching action. Returns whether the key was
    /// wired on this screen.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        let Some(ch) = plain_char(key) else {
            return false;
        };
        match self {
            Self::Main(screen) => match find_binding(screen.bindings(), ch) {
                Some(action) => {
                    screen.trigger(action);
                    true
                }
                None => false,
            },
            Self::Child(screen) => match find_binding(screen.bindings(), ch) {
                Some(action) => {
                    screen.trigger(action);
                    true
                }
                None => false,
            },
        }
    }
}

fn find_binding<A: Copy>(bindings: &[Binding<A>], ch: char) -> Option<A> {
    bindings
        .iter()
        .find(|binding| binding.key.eq_ignore_ascii_case(&ch))
        .map(|binding| binding.action)
}

fn plain_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(ch),
        _ => None,
    }
}
