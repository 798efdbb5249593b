use crate::screens::ScreenKind;
use std::collections::VecDeque;
use std::fmt;
use std::time::SystemTime;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// A navigation change that actually happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Push(ScreenKind),
    Present(ScreenKind),
    /// Carries the root screen of the dismissed modal context.
    Dismiss(ScreenKind),
    Pop(ScreenKind),
    Alert { title: String },
    AlertAcknowledged,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Push(kind) => write!(f, "Push {}", kind),
            Transition::Present(kind) => write!(f, "Present {}", kind),
            Transition::Dismiss(kind) => write!(f, "Dismiss {}", kind),
            Transition::Pop(kind) => write!(f, "Pop {}", kind),
            Transition::Alert { title } => write!(f, "Alert \"{}\"", title),
            Transition::AlertAcknowledged => write!(f, "Alert acknowledged"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRecord {
    pub timestamp: SystemTime,
    pub transition: Transition,
}

/// Bounded log of applied transitions, oldest first.
#[derive(Debug, Clone)]
pub struct TransitionLog {
    entries: VecDeque<TransitionRecord>,
    limit: usize,
}

impl TransitionLog {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn record(&mut self, transition: Transition) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(TransitionRecord {
            timestamp: SystemTime::now(),
            transition,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Transition> {
        self.entries.back().map(|record| &record.transition)
    }

    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.entries.iter().map(|record| &record.transition)
    }

    pub fn snapshot(&self) -> Vec<TransitionRecord> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
