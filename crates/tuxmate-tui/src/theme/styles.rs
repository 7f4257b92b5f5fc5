//! Semantic style builders for the catalog TUI.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use tuxmate_app::StatusKind;
use tuxmate_core::InstallMechanism;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - the focused row or active tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn checked() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

/// Selected on the catalog but not installable on the active distro
pub fn unavailable() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn mechanism_badge(mechanism: InstallMechanism) -> Option<(&'static str, Style)> {
    match mechanism {
        InstallMechanism::Repo => None,
        InstallMechanism::Aur => Some(("AUR", Style::default().fg(palette::AUR_BADGE))),
        InstallMechanism::Manual => Some(("manual", Style::default().fg(palette::MANUAL_BADGE))),
    }
}

pub fn status(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => Style::default().fg(palette::STATUS_BLUE),
        StatusKind::Success => Style::default().fg(palette::STATUS_GREEN),
        StatusKind::Error => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_focused_selected_is_contrast_on_accent() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_repo_has_no_badge() {
        assert!(mechanism_badge(InstallMechanism::Repo).is_none());
        assert_eq!(mechanism_badge(InstallMechanism::Aur).unwrap().0, "AUR");
    }

    #[test]
    fn test_error_status_is_red() {
        assert_eq!(status(StatusKind::Error).fg, Some(palette::STATUS_RED));
    }
}
