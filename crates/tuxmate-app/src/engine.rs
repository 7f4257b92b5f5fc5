//! Engine - shared orchestration for the TUI and headless frontends
//!
//! Owns the `AppState`, runs messages through the TEA update cycle
//! (following up chained messages), hands side effects back to the caller
//! and delivers the resulting domain events to registered plugins.

use std::sync::Arc;

use tuxmate_core::prelude::*;
use tuxmate_core::Catalog;

use crate::config::Settings;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::plugin::EnginePlugin;
use crate::state::AppState;

/// Upper bound on follow-up messages produced by one input
const MAX_CHAINED_MESSAGES: usize = 32;

#[derive(Debug)]
pub struct Engine {
    state: AppState,
    plugins: Vec<Box<dyn EnginePlugin>>,
}

impl Engine {
    pub fn new(catalog: Arc<Catalog>, settings: Settings) -> Self {
        Self {
            state: AppState::with_settings(catalog, settings),
            plugins: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access for frontends that seed state before the loop
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    // ─────────────────────────────────────────────────────────
    // Plugins
    // ─────────────────────────────────────────────────────────

    pub fn register_plugin(&mut self, plugin: Box<dyn EnginePlugin>) {
        info!("Registered plugin: {}", plugin.name());
        self.plugins.push(plugin);
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Notify plugins that the engine is running
    pub fn start(&mut self) {
        for plugin in &self.plugins {
            if let Err(e) = plugin.on_start(&self.state) {
                warn!("Plugin '{}' failed on_start: {}", plugin.name(), e);
            }
        }
    }

    /// Notify plugins that the engine is stopping
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        for plugin in &self.plugins {
            if let Err(e) = plugin.on_shutdown() {
                warn!("Plugin '{}' failed on_shutdown: {}", plugin.name(), e);
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Message Processing
    // ─────────────────────────────────────────────────────────

    /// Run a message and its follow-ups through `update`
    ///
    /// Returns the side effects for the caller to perform. Their outcome is
    /// reported back with `Message::CommandCopied`, `Message::ScriptSaved`
    /// or `Message::ActionFailed`.
    pub fn process_message(&mut self, message: Message) -> Vec<UpdateAction> {
        let mut actions = Vec::new();
        let mut next = Some(message);
        let mut processed = 0;

        while let Some(msg) = next.take() {
            if processed == MAX_CHAINED_MESSAGES {
                warn!("Dropping message chain after {} follow-ups", processed);
                break;
            }
            processed += 1;

            trace!("Processing {:?}", msg);
            let result = handler::update(&mut self.state, msg.clone());
            actions.extend(result.action);
            next = result.message;

            self.notify_message(&msg);
            self.deliver_events();
        }

        actions
    }

    fn notify_message(&self, msg: &Message) {
        for plugin in &self.plugins {
            if let Err(e) = plugin.on_message(msg, &self.state) {
                warn!("Plugin '{}' failed on_message: {}", plugin.name(), e);
            }
        }
    }

    fn deliver_events(&mut self) {
        for event in self.state.take_events() {
            for plugin in &self.plugins {
                if let Err(e) = plugin.on_event(&event) {
                    warn!(
                        "Plugin '{}' failed on {}: {}",
                        plugin.name(),
                        event.event_type(),
                        e
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use tuxmate_core::DistroId;

    fn test_engine() -> Engine {
        Engine::new(Arc::new(Catalog::builtin().unwrap()), Settings::default())
    }

    #[test]
    fn test_key_message_is_followed_up() {
        let mut engine = test_engine();
        engine.process_message(Message::Key(InputKey::Char('s')));
        assert_eq!(engine.state().distro.as_str(), "debian");
    }

    #[test]
    fn test_actions_are_returned_to_caller() {
        let mut engine = test_engine();
        engine.process_message(Message::ToggleApp("vim".into()));

        let actions = engine.process_message(Message::Key(InputKey::Char('y')));
        assert!(matches!(
            actions.as_slice(),
            [UpdateAction::CopyToClipboard { .. }]
        ));
    }

    #[test]
    fn test_events_are_drained_after_processing() {
        let mut engine = test_engine();
        engine.process_message(Message::SetDistro(DistroId::from("arch")));
        assert!(engine.state_mut().take_events().is_empty());
    }

    #[test]
    fn test_quit_stops_engine() {
        let mut engine = test_engine();
        engine.process_message(Message::Key(InputKey::Char('q')));
        assert!(engine.should_quit());
    }

    #[test]
    fn test_settings_seed_state() {
        let mut settings = Settings::default();
        settings.general.default_distro = "fedora".into();
        let engine = Engine::new(Arc::new(Catalog::builtin().unwrap()), settings);
        assert_eq!(engine.state().distro.as_str(), "fedora");
    }
}
