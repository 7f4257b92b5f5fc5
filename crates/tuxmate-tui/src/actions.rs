//! Side effects requested by the handler
//!
//! Each action runs to completion and reports back as a message, so failures
//! end up in the status bar instead of tearing down the terminal.

use std::fs;
use std::path::Path;

use tuxmate_app::{Message, UpdateAction};
use tuxmate_core::prelude::*;

/// Clipboard the runner writes the command to
pub trait ClipboardAccess: Sized {
    fn open() -> Result<Self>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard
///
/// On X11 and Wayland this process owns the copied text, so the handle must
/// outlive the copy for other apps to paste it.
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl ClipboardAccess for SystemClipboard {
    fn open() -> Result<Self> {
        let clipboard = arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
        Ok(Self { clipboard })
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text.to_owned())
            .map_err(|e| Error::clipboard(e.to_string()))
    }
}

/// Performs actions for one TUI session
///
/// The clipboard is opened on the first copy and kept until the session ends.
pub struct ActionRunner<C: ClipboardAccess = SystemClipboard> {
    clipboard: Option<C>,
}

impl<C: ClipboardAccess> Default for ActionRunner<C> {
    fn default() -> Self {
        Self { clipboard: None }
    }
}

impl<C: ClipboardAccess> ActionRunner<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform an action and describe its outcome
    pub fn perform(&mut self, action: UpdateAction) -> Message {
        match action {
            UpdateAction::CopyToClipboard { text } => match self.copy_to_clipboard(&text) {
                Ok(()) => Message::CommandCopied,
                Err(e) => {
                    warn!("Clipboard copy failed: {}", e);
                    Message::ActionFailed {
                        message: e.to_string(),
                    }
                }
            },
            UpdateAction::WriteScript { path, contents } => match write_script(&path, &contents) {
                Ok(()) => Message::ScriptSaved { path },
                Err(e) => {
                    warn!("Writing {} failed: {}", path.display(), e);
                    Message::ActionFailed {
                        message: format!("Could not write {}: {}", path.display(), e),
                    }
                }
            },
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => C::open()?,
        };
        let clipboard = self.clipboard.insert(clipboard);
        clipboard.set_text(text)?;
        debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

/// Write the script and mark it executable
pub fn write_script(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("Writing {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .context("Marking script executable")?;
    }

    info!("Wrote install script to {}", path.display());
    Ok(())
}
