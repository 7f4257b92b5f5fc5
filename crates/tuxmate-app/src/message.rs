//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use tuxmate_core::{AurHelper, DistroId};

use crate::focus::Direction;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus Navigation
    // ─────────────────────────────────────────────────────────
    Navigate(Direction),
    /// Activate the focused category or app
    Activate,
    ClearFocus,

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    ToggleApp(String),
    ClearSelection,

    // ─────────────────────────────────────────────────────────
    // Distro & AUR Helper
    // ─────────────────────────────────────────────────────────
    SetDistro(DistroId),
    NextDistro,
    PreviousDistro,
    SetHelper(AurHelper),
    SetHasHelperInstalled(bool),
    ToggleHasHelperInstalled,

    // ─────────────────────────────────────────────────────────
    // AUR Prompt
    // ─────────────────────────────────────────────────────────
    AurPromptAnswer { has_helper: bool },
    AurPromptChoose(AurHelper),
    AurPromptDismiss,

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    StartSearch,
    /// Replace the query with `text`
    SearchInput { text: String },
    /// Leave input mode, keep the query
    SubmitSearch,
    /// Leave input mode and clear the query
    CancelSearch,

    // ─────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────
    TogglePreview,
    CopyCommand,
    DownloadScript,
    /// Clipboard write succeeded
    CommandCopied,
    /// Script file written
    ScriptSaved { path: PathBuf },
    /// A side effect failed at the edge
    ActionFailed { message: String },
}
