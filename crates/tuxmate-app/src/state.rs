//! Application state (Model in TEA pattern)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tuxmate_core::generator::{self, Generation};
use tuxmate_core::{Catalog, Distro, DistroId, HelperPolicy, JoinPolicies, Selection};

use crate::aur_prompt::AurPromptState;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::focus::{FocusState, NavView};
use crate::search::SearchState;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Catalog list with keyboard navigation
    #[default]
    Normal,

    /// Search input mode - typed characters go to the query
    SearchInput,

    /// AUR helper prompt is asking a question
    AurPrompt,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line feedback shown in the command bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub settings: Settings,

    /// Active distro, always one the catalog knows
    pub distro: DistroId,
    pub selection: Selection,
    pub helper_policy: HelperPolicy,
    pub join_policies: JoinPolicies,

    pub focus: FocusState,
    pub search: SearchState,
    pub aur_prompt: AurPromptState,

    pub ui_mode: UiMode,
    pub phase: AppPhase,
    /// Script preview panel open
    pub show_preview: bool,
    pub status: Option<StatusMessage>,

    /// Events raised while handling the current message
    pending_events: Vec<EngineEvent>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_settings(catalog, Settings::default())
    }

    /// Create state from a catalog and loaded settings
    ///
    /// An unknown `default_distro` falls back to the catalog's first distro.
    pub fn with_settings(catalog: Arc<Catalog>, settings: Settings) -> Self {
        let requested = DistroId::from(settings.general.default_distro.as_str());
        let distro = if catalog.distro(&requested).is_some() {
            requested
        } else {
            let fallback = catalog
                .distros()
                .first()
                .map(|d| d.id.clone())
                .unwrap_or(requested);
            tracing::warn!(
                "Unknown default distro '{}', using '{}'",
                settings.general.default_distro,
                fallback
            );
            fallback
        };

        let mut focus = FocusState::new(settings.navigation.wrap_policy());
        if settings.navigation.start_expanded {
            focus.expand_all(catalog.categories().iter().map(|c| c.id.clone()));
        }

        Self {
            distro,
            selection: Selection::new(),
            helper_policy: settings.generator.helper_policy(),
            join_policies: settings.generator.join.clone(),
            focus,
            search: SearchState::default(),
            aur_prompt: AurPromptState::default(),
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            show_preview: settings.ui.show_preview,
            status: None,
            pending_events: Vec::new(),
            catalog,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn active_distro(&self) -> Option<&Distro> {
        self.catalog.distro(&self.distro)
    }

    /// Visible categories/apps for the current search query
    pub fn nav_view(&self) -> NavView {
        NavView::from_catalog(&self.catalog, &self.search.query)
    }

    /// Command and script for the current selection, recomputed on every call
    pub fn generation(&self) -> Generation {
        generator::generate(
            &self.catalog,
            &self.distro,
            &self.selection,
            &self.helper_policy,
            &self.join_policies,
        )
    }

    /// Whether the helper controls apply (pacman distro with AUR apps selected)
    pub fn show_aur_ui(&self) -> bool {
        let has_aur = generator::partition(&self.catalog, &self.distro, &self.selection)
            .has_aur_packages();
        has_aur && self.active_distro().is_some_and(|d| d.family.supports_aur())
    }

    /// Where a downloaded script for the active distro goes
    pub fn script_path(&self) -> PathBuf {
        let dir = self
            .settings
            .general
            .script_dir
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(generator::script_filename(&self.distro))
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    // ─────────────────────────────────────────────────────────
    // Event Queue
    // ─────────────────────────────────────────────────────────

    pub fn emit(&mut self, event: EngineEvent) {
        self.pending_events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
