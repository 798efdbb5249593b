pub mod app;
pub mod components;
pub mod events;
pub mod footer;
pub mod header;
pub mod history;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen_view;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
