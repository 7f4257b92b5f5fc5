//! Plugin system for extending Engine functionality.
//!
//! The `EnginePlugin` trait lets frontends and observers hook into the Engine
//! lifecycle without touching the update function: they see every processed
//! message and every domain event after the state change it describes.

use std::fmt;

use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::state::AppState;
use tuxmate_core::prelude::*;

/// Extension trait for Engine plugins.
///
/// Every callback has a default no-op implementation, so plugins only
/// override the hooks they care about.
///
/// # Plugin Lifecycle
///
/// 1. Plugin is registered via `Engine::register_plugin()`
/// 2. `on_start()` is called once from `Engine::start()`
/// 3. `on_message()` is called after each message is processed (with full post-state)
/// 4. `on_event()` is called for each EngineEvent raised by that message
/// 5. `on_shutdown()` is called from `Engine::shutdown()`
///
/// A plugin returning an error is logged and skipped; it never stops the engine.
pub trait EnginePlugin: Send + Sync + fmt::Debug {
    /// Unique name for this plugin (for logging and identification).
    fn name(&self) -> &str;

    /// Called when the Engine starts.
    fn on_start(&self, _state: &AppState) -> Result<()> {
        Ok(())
    }

    /// Called after a message has been processed through the TEA update cycle.
    fn on_message(&self, _msg: &Message, _state: &AppState) -> Result<()> {
        Ok(())
    }

    /// Called for each EngineEvent emitted while processing a message.
    fn on_event(&self, _event: &EngineEvent) -> Result<()> {
        Ok(())
    }

    /// Called when the Engine is shutting down.
    fn on_shutdown(&self) -> Result<()> {
        Ok(())
    }
}

/// Writes every domain event to the tracing log
#[derive(Debug, Default)]
pub struct TracingPlugin;

impl EnginePlugin for TracingPlugin {
    fn name(&self) -> &str {
        "tracing"
    }

    fn on_start(&self, state: &AppState) -> Result<()> {
        info!(
            "Engine started: {} distros, {} apps, distro={}",
            state.catalog.distros().len(),
            state.catalog.apps().count(),
            state.distro
        );
        Ok(())
    }

    fn on_event(&self, event: &EngineEvent) -> Result<()> {
        debug!(event = event.event_type(), "{:?}", event);
        Ok(())
    }
}
