pub mod cli;
pub mod config;
pub mod logging;
pub mod nav;
pub mod screens;
pub mod ui;
