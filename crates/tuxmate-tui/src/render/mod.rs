//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use tuxmate_app::{AppState, UiMode};
use tuxmate_core::generator::script_filename;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: the generation is recomputed from state for every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.show_preview);
    let generation = state.generation();

    let header = widgets::MainHeader::new(state.catalog.distros(), &state.distro)
        .selected_count(state.selection.count());
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::CatalogList::new(state), areas.catalog);
    render_search_bar(frame, areas.catalog, state);

    if let Some(preview_area) = areas.preview {
        let filename = script_filename(&state.distro);
        frame.render_widget(
            widgets::ScriptPreview::new(&generation.script, &filename),
            preview_area,
        );
    }

    let command_bar = widgets::CommandBar::new(&generation, state.helper_policy)
        .status(state.status.as_ref())
        .mode(state.ui_mode);
    frame.render_widget(command_bar, areas.footer);

    if state.ui_mode == UiMode::AurPrompt {
        frame.render_widget(
            widgets::AurPromptCard::new(state.aur_prompt.stage, &generation.aur_app_names),
            area,
        );
    }
}

/// Search bar on the last inner row of the catalog list
fn render_search_bar(frame: &mut Frame, catalog: Rect, state: &AppState) {
    let editing = state.ui_mode == UiMode::SearchInput;
    if !editing && !state.search.is_active() {
        return;
    }
    if catalog.height < 3 || catalog.width < 3 {
        return;
    }

    let bar = Rect::new(
        catalog.x + 1,
        catalog.y + catalog.height - 2,
        catalog.width - 2,
        1,
    );
    frame.render_widget(Clear, bar);
    frame.render_widget(
        widgets::SearchInput::new(&state.search).editing(editing),
        bar,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tuxmate_app::handler::update;
    use tuxmate_app::Message;

    use crate::test_utils::{test_state, TestTerminal};

    fn draw(state: &AppState, width: u16, height: u16) -> TestTerminal {
        let mut term = TestTerminal {
            terminal: Terminal::new(TestBackend::new(width, height)).unwrap(),
        };
        term.terminal.draw(|frame| view(frame, state)).unwrap();
        term
    }

    #[test]
    fn test_view_renders_all_regions() {
        let state = test_state();
        let term = draw(&state, 120, 30);

        assert!(term.buffer_contains("tuxmate"));
        assert!(term.buffer_contains("Web Browsers"));
        assert!(term.buffer_contains("Select apps to build an install command"));
    }

    #[test]
    fn test_view_shows_preview_when_open() {
        let mut state = test_state();
        update(&mut state, Message::ToggleApp("vim".into()));
        update(&mut state, Message::TogglePreview);

        let term = draw(&state, 120, 30);
        assert!(term.buffer_contains("tuxmate-ubuntu.sh"));
        assert!(term.buffer_contains("#!/usr/bin/env bash"));
    }

    #[test]
    fn test_view_shows_aur_card_on_arch() {
        let mut state = test_state();
        update(&mut state, Message::SetDistro("arch".into()));
        update(&mut state, Message::ToggleApp("spotify".into()));
        assert_eq!(state.ui_mode, UiMode::AurPrompt);

        let term = draw(&state, 120, 30);
        assert!(term.buffer_contains("Do you already have an AUR helper?"));
        assert!(term.buffer_contains("Spotify"));
    }

    #[test]
    fn test_view_shows_search_bar_while_typing() {
        let mut state = test_state();
        update(&mut state, Message::StartSearch);
        update(&mut state, Message::SearchInput { text: "vlc".into() });

        let term = draw(&state, 100, 24);
        assert!(term.buffer_contains("/vlc"));
        assert!(term.buffer_contains("Media"));
        assert!(!term.buffer_contains("Web Browsers"));
    }

    #[test]
    fn test_view_survives_small_terminal() {
        let state = test_state();
        draw(&state, 20, 6);
    }
}
