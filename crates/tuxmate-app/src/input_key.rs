//! Abstract input key event, independent of terminal library.
//!
//! Keeps tuxmate-app free of crossterm types so the handler can be driven
//! from tests or a headless frontend.

/// Abstract input key event, converted from crossterm at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key, including space
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char(' '), InputKey::Char(' '));
        assert_ne!(InputKey::Char('y'), InputKey::Char('d'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
