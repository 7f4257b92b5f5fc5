//! Domain events emitted by the Engine for external consumers
//!
//! Events are queued on `AppState` while a message is handled and delivered
//! to registered plugins after the processing cycle, so plugins always see
//! the state the events describe.

use std::path::PathBuf;

use tuxmate_core::{AurHelper, DistroId};

/// Domain events emitted by the Engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    /// An app was added to or removed from the selection
    AppToggled { app_id: String, selected: bool },

    /// The selection was emptied
    SelectionCleared { count: usize },

    // ─────────────────────────────────────────────────────────
    // Generation inputs
    // ─────────────────────────────────────────────────────────
    DistroChanged { from: DistroId, to: DistroId },

    HelperChanged {
        helper: AurHelper,
        has_helper_installed: bool,
    },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    CategoryExpanded { category: String },

    CategoryCollapsed { category: String },

    // ─────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────
    /// The copy command reached the clipboard
    CommandCopied { distro: DistroId, app_count: usize },

    /// The install script was written to disk
    ScriptDownloaded { distro: DistroId, path: PathBuf },
}

impl EngineEvent {
    /// Short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::AppToggled { .. } => "app_toggled",
            EngineEvent::SelectionCleared { .. } => "selection_cleared",
            EngineEvent::DistroChanged { .. } => "distro_changed",
            EngineEvent::HelperChanged { .. } => "helper_changed",
            EngineEvent::CategoryExpanded { .. } => "category_expanded",
            EngineEvent::CategoryCollapsed { .. } => "category_collapsed",
            EngineEvent::CommandCopied { .. } => "command_copied",
            EngineEvent::ScriptDownloaded { .. } => "script_downloaded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        let event = EngineEvent::AppToggled {
            app_id: "vim".into(),
            selected: true,
        };
        assert_eq!(event.event_type(), "app_toggled");

        let event = EngineEvent::ScriptDownloaded {
            distro: DistroId::from("arch"),
            path: PathBuf::from("tuxmate-arch.sh"),
        };
        assert_eq!(event.event_type(), "script_downloaded");
    }
}
