//! Screen layout definitions for the TUI
//!
//! Header with distro tabs on top, command bar at the bottom, catalog list in
//! between. The script preview takes the right half of the body when open.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + distro tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Command bar: top border + command row + status/shortcuts row + bottom border
pub const FOOTER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,

    /// Category/app list
    pub catalog: Rect,

    /// Script preview, when open
    pub preview: Option<Rect>,

    /// Command line, status and shortcut hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_preview: bool) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    let (catalog, preview) = if show_preview {
        let body = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        (body[0], Some(body[1]))
    } else {
        (chunks[1], None)
    };

    ScreenAreas {
        header: chunks[0],
        catalog,
        preview,
        footer: chunks[2],
    }
}
