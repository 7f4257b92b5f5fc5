//! tuxmate-app - Application state and orchestration for tuxmate
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: focus navigation over the catalog, search, the AUR helper
//! prompt, configuration loading, and the Engine that drives `update` and
//! notifies plugins. It has no terminal dependencies.

pub mod aur_prompt;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod focus;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod plugin;
pub mod search;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use focus::{Direction, Focus, FocusEffect, FocusState, NavView, WrapPolicy};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use plugin::{EnginePlugin, TracingPlugin};
pub use state::{AppState, StatusKind, StatusMessage, UiMode};
