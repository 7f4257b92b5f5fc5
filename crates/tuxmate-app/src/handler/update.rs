//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info};
use tuxmate_core::{AurHelper, DistroId};

use crate::engine_event::EngineEvent;
use crate::focus::{Direction, FocusEffect};
use crate::message::Message;
use crate::state::{AppPhase, AppState, StatusMessage, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);
    sync_aur_prompt(state);
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(direction) => handle_navigate(state, direction),
        Message::Activate => handle_activate(state),
        Message::ClearFocus => {
            state.focus.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::ToggleApp(app_id) => {
            toggle_app(state, &app_id);
            UpdateResult::none()
        }

        Message::ClearSelection => {
            let count = state.selection.count();
            state.selection.clear();
            state.aur_prompt.reset();
            if count > 0 {
                state.emit(EngineEvent::SelectionCleared { count });
                state.set_status(StatusMessage::info(format!("Cleared {} apps", count)));
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Distro & AUR Helper
        // ─────────────────────────────────────────────────────────
        Message::SetDistro(distro) => {
            set_distro(state, distro);
            UpdateResult::none()
        }
        Message::NextDistro => cycle_distro(state, 1),
        Message::PreviousDistro => cycle_distro(state, -1),

        Message::SetHelper(helper) => {
            let installed = state.helper_policy.has_helper_installed;
            set_helper(state, helper, installed);
            UpdateResult::none()
        }
        Message::SetHasHelperInstalled(installed) => {
            let helper = state.helper_policy.helper;
            set_helper(state, helper, installed);
            UpdateResult::none()
        }
        Message::ToggleHasHelperInstalled => {
            let policy = state.helper_policy;
            set_helper(state, policy.helper, !policy.has_helper_installed);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // AUR Prompt
        // ─────────────────────────────────────────────────────────
        Message::AurPromptAnswer { has_helper } => {
            state.aur_prompt.answer_has_helper(has_helper);
            let helper = state.helper_policy.helper;
            set_helper(state, helper, has_helper);
            UpdateResult::none()
        }
        Message::AurPromptChoose(helper) => {
            state.aur_prompt.helper_chosen();
            let installed = state.helper_policy.has_helper_installed;
            set_helper(state, helper, installed);
            state.set_status(StatusMessage::info(
                "You can change the AUR helper later with 1/2 and a",
            ));
            UpdateResult::none()
        }
        Message::AurPromptDismiss => {
            state.aur_prompt.dismiss();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }
        Message::SearchInput { text } => {
            state.search.set_query(text);
            let view = state.nav_view();
            state.focus.reconcile(&view);
            UpdateResult::none()
        }
        Message::SubmitSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::CancelSearch => {
            state.search.clear();
            state.ui_mode = UiMode::Normal;
            let view = state.nav_view();
            state.focus.reconcile(&view);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Output
        // ─────────────────────────────────────────────────────────
        Message::TogglePreview => {
            state.show_preview = !state.show_preview;
            UpdateResult::none()
        }

        Message::CopyCommand => {
            let generation = state.generation();
            if generation.command.is_empty() {
                state.set_status(StatusMessage::info("Nothing to copy for this distro"));
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::CopyToClipboard {
                text: generation.command,
            })
        }

        Message::DownloadScript => {
            let generation = state.generation();
            if generation.script.is_empty() {
                state.set_status(StatusMessage::info("Nothing to download for this distro"));
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::WriteScript {
                path: state.script_path(),
                contents: generation.script,
            })
        }

        Message::CommandCopied => {
            let app_count = state.generation().included_count;
            state.emit(EngineEvent::CommandCopied {
                distro: state.distro.clone(),
                app_count,
            });
            state.set_status(StatusMessage::success("Command copied to clipboard"));
            UpdateResult::none()
        }

        Message::ScriptSaved { path } => {
            state.set_status(StatusMessage::success(format!("Saved {}", path.display())));
            state.emit(EngineEvent::ScriptDownloaded {
                distro: state.distro.clone(),
                path,
            });
            UpdateResult::none()
        }

        Message::ActionFailed { message } => {
            state.set_status(StatusMessage::error(message));
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn handle_navigate(state: &mut AppState, direction: Direction) -> UpdateResult {
    let view = state.nav_view();
    let effect = state.focus.navigate(&view, direction);
    apply_focus_effect(state, effect);
    UpdateResult::none()
}

fn handle_activate(state: &mut AppState) -> UpdateResult {
    let view = state.nav_view();
    let effect = state.focus.activate(&view);
    apply_focus_effect(state, effect);
    UpdateResult::none()
}

fn apply_focus_effect(state: &mut AppState, effect: FocusEffect) {
    match effect {
        FocusEffect::None => {}
        FocusEffect::Expanded(category) => {
            debug!("Category expanded: {}", category);
            state.emit(EngineEvent::CategoryExpanded { category });
        }
        FocusEffect::Collapsed(category) => {
            debug!("Category collapsed: {}", category);
            state.emit(EngineEvent::CategoryCollapsed { category });
        }
        FocusEffect::ToggleApp(app_id) => toggle_app(state, &app_id),
    }
}

fn toggle_app(state: &mut AppState, app_id: &str) {
    let catalog = state.catalog.clone();
    let Some(selected) = state.selection.toggle(&catalog, app_id) else {
        return;
    };
    debug!("Toggled {} -> {}", app_id, selected);
    state.emit(EngineEvent::AppToggled {
        app_id: app_id.to_string(),
        selected,
    });

    if selected && !catalog.is_available(app_id, &state.distro) {
        let name = catalog.app(app_id).map_or(app_id, |a| a.name.as_str());
        state.set_status(StatusMessage::info(format!(
            "{} is not available on {}",
            name, state.distro
        )));
    }
}

fn set_distro(state: &mut AppState, distro: DistroId) {
    let Some(name) = state.catalog.distro(&distro).map(|d| d.name.clone()) else {
        debug!("Ignoring unknown distro '{}'", distro);
        return;
    };
    if distro == state.distro {
        return;
    }

    let from = std::mem::replace(&mut state.distro, distro.clone());
    info!("Distro changed: {} -> {}", from, distro);
    state.emit(EngineEvent::DistroChanged { from, to: distro });

    let unavailable = state.generation().unavailable.len();
    if unavailable > 0 {
        state.set_status(StatusMessage::info(format!(
            "{}: {} selected app{} not available",
            name,
            unavailable,
            if unavailable == 1 { "" } else { "s" }
        )));
    } else {
        state.status = None;
    }
}

fn cycle_distro(state: &mut AppState, delta: isize) -> UpdateResult {
    let distros = state.catalog.distros();
    if distros.is_empty() {
        return UpdateResult::none();
    }
    let current = distros
        .iter()
        .position(|d| d.id == state.distro)
        .unwrap_or(0) as isize;
    let len = distros.len() as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    UpdateResult::message(Message::SetDistro(distros[next].id.clone()))
}

fn set_helper(state: &mut AppState, helper: AurHelper, has_helper_installed: bool) {
    let policy = &mut state.helper_policy;
    if policy.helper == helper && policy.has_helper_installed == has_helper_installed {
        return;
    }
    policy.helper = helper;
    policy.has_helper_installed = has_helper_installed;
    state.emit(EngineEvent::HelperChanged {
        helper,
        has_helper_installed,
    });
}

/// Open or close the AUR prompt to match the current selection
fn sync_aur_prompt(state: &mut AppState) {
    state.aur_prompt.sync(state.show_aur_ui());
    match (state.aur_prompt.is_open(), state.ui_mode) {
        (true, UiMode::Normal) => state.ui_mode = UiMode::AurPrompt,
        (false, UiMode::AurPrompt) => state.ui_mode = UiMode::Normal,
        _ => {}
    }
}
