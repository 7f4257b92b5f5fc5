//! Search input prompt widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tuxmate_app::search::SearchState;

use crate::theme::{palette, styles};

/// One-line `/query` bar drawn over the bottom of the catalog list
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    /// Typing goes to the query; show a cursor
    editing: bool,
}

impl<'a> SearchInput<'a> {
    pub fn new(search_state: &'a SearchState) -> Self {
        Self {
            search_state,
            editing: false,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(palette::POPUP_BG));

        let mut spans = vec![
            Span::styled(
                "/",
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.search_state.query.as_str(), styles::text_primary()),
        ];
        if self.editing {
            spans.push(Span::styled(
                "█",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_search_input_shows_query_and_cursor() {
        let mut search = SearchState::default();
        search.set_query("fire");

        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(SearchInput::new(&search).editing(true), term.area());

        assert!(term.buffer_contains("/fire█"));
    }

    #[test]
    fn test_submitted_query_has_no_cursor() {
        let mut search = SearchState::default();
        search.set_query("vim");

        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(SearchInput::new(&search), term.area());

        assert!(term.buffer_contains("/vim"));
        assert!(!term.buffer_contains("█"));
    }
}
