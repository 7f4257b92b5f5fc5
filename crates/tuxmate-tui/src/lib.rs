//! tuxmate-tui - Terminal UI for tuxmate
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! Engine from tuxmate-app and adds terminal rendering, event polling, the
//! widgets, and the side effects (clipboard, script files) the handler asks for.

pub mod actions;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
