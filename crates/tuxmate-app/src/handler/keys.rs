//! Key event handlers for different UI modes

use tuxmate_core::AurHelper;

use crate::aur_prompt::AurPromptStage;
use crate::focus::Direction;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::AurPrompt => handle_key_aur_prompt(state, key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let has_selection = !state.selection.is_empty();

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Focus Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::Navigate(Direction::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::Navigate(Direction::Down)),
        InputKey::Left | InputKey::Char('h') => Some(Message::Navigate(Direction::Left)),
        InputKey::Right | InputKey::Char('l') => Some(Message::Navigate(Direction::Right)),
        InputKey::Char(' ') | InputKey::Enter => Some(Message::Activate),

        // Esc closes the preview first, then drops focus
        InputKey::Esc => {
            if state.show_preview {
                Some(Message::TogglePreview)
            } else {
                Some(Message::ClearFocus)
            }
        }

        InputKey::Char('/') => Some(Message::StartSearch),

        // ─────────────────────────────────────────────────────────
        // Distro
        // ─────────────────────────────────────────────────────────
        InputKey::Char('s') => Some(Message::NextDistro),
        InputKey::Char('S') | InputKey::BackTab => Some(Message::PreviousDistro),

        // ─────────────────────────────────────────────────────────
        // Output (only meaningful with something selected)
        // ─────────────────────────────────────────────────────────
        InputKey::Char('y') if has_selection => Some(Message::CopyCommand),
        InputKey::Char('d') if has_selection => Some(Message::DownloadScript),
        InputKey::Char('c') if has_selection => Some(Message::ClearSelection),
        InputKey::Tab => Some(Message::TogglePreview),

        // ─────────────────────────────────────────────────────────
        // AUR helper controls (pacman distro with AUR apps selected)
        // ─────────────────────────────────────────────────────────
        InputKey::Char('1') if state.show_aur_ui() => Some(Message::SetHelper(AurHelper::Yay)),
        InputKey::Char('2') if state.show_aur_ui() => Some(Message::SetHelper(AurHelper::Paru)),
        InputKey::Char('a') if state.show_aur_ui() => Some(Message::ToggleHasHelperInstalled),

        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelSearch),

        // Keep the query, go back to browsing the filtered list
        InputKey::Enter => Some(Message::SubmitSearch),

        InputKey::Backspace => {
            let mut query = state.search.query.clone();
            query.pop()?;
            Some(Message::SearchInput { text: query })
        }

        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut query = state.search.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        // Arrow keys still move through the filtered list
        InputKey::Up => Some(Message::Navigate(Direction::Up)),
        InputKey::Down => Some(Message::Navigate(Direction::Down)),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events while the AUR helper prompt is open
fn handle_key_aur_prompt(state: &AppState, key: InputKey) -> Option<Message> {
    match (state.aur_prompt.stage, key.clone()) {
        (_, InputKey::Esc) => Some(Message::AurPromptDismiss),
        (_, InputKey::Char('q') | InputKey::CharCtrl('c')) => Some(Message::Quit),

        (AurPromptStage::AskHasHelper, InputKey::Char('y' | 'Y')) => {
            Some(Message::AurPromptAnswer { has_helper: true })
        }
        (AurPromptStage::AskHasHelper, InputKey::Char('n' | 'N')) => {
            Some(Message::AurPromptAnswer { has_helper: false })
        }

        (AurPromptStage::AskHelper { .. }, InputKey::Char('1')) => {
            Some(Message::AurPromptChoose(AurHelper::Yay))
        }
        (AurPromptStage::AskHelper { .. }, InputKey::Char('2')) => {
            Some(Message::AurPromptChoose(AurHelper::Paru))
        }

        // The card does not block browsing the list
        (
            _,
            InputKey::Up
            | InputKey::Down
            | InputKey::Left
            | InputKey::Right
            | InputKey::Char('k' | 'j' | 'h' | 'l' | ' ' | '/')
            | InputKey::Enter
            | InputKey::Tab,
        ) => handle_key_normal(state, key),

        _ => None,
    }
}
