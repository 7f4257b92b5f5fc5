//! Category/app tree with focus, selection marks and availability

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use tuxmate_app::{AppState, Focus};
use tuxmate_core::App;

use crate::theme::{palette, styles};

/// The catalog as the user navigates it
pub struct CatalogList<'a> {
    state: &'a AppState,
}

impl<'a> CatalogList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Rendered rows and the index of the focused one
    fn rows(&self, width: u16) -> (Vec<Line<'a>>, Option<usize>) {
        let state = self.state;
        let view = state.nav_view();
        let focus = state.focus.focus();
        let mut rows = Vec::new();
        let mut focused_row = None;

        for nav in view.categories() {
            let Some(category) = state.catalog.category(&nav.id) else {
                continue;
            };
            let expanded = state.focus.is_expanded(&nav.id);
            let selected = nav
                .apps
                .iter()
                .filter(|id| state.selection.has(id))
                .count();

            let is_focused = matches!(focus, Focus::Category { id } if id == &nav.id);
            if is_focused {
                focused_row = Some(rows.len());
            }
            rows.push(category_row(
                &category.name,
                expanded,
                selected,
                nav.apps.len(),
                is_focused,
            ));

            if !expanded {
                continue;
            }
            for app_id in &nav.apps {
                let Some(app) = state.catalog.app(app_id) else {
                    continue;
                };
                let is_focused = focus.app_id() == Some(app_id.as_str());
                if is_focused {
                    focused_row = Some(rows.len());
                }
                rows.push(self.app_row(app, is_focused, width));
            }
        }

        (rows, focused_row)
    }

    fn app_row(&self, app: &'a App, focused: bool, width: u16) -> Line<'a> {
        let state = self.state;
        let selected = state.selection.has(&app.id);
        let spec = app.spec_for(&state.distro);

        let mark = if selected { "[✓]" } else { "[ ]" };
        let mark_style = if selected {
            styles::checked()
        } else {
            styles::text_muted()
        };
        let name_style = match spec {
            None if selected => styles::unavailable(),
            None => styles::text_muted(),
            Some(_) => styles::text_primary(),
        };

        let mut spans = vec![
            Span::raw("    "),
            Span::styled(mark, mark_style),
            Span::raw(" "),
            Span::styled(app.name.as_str(), name_style),
        ];

        match spec.and_then(|s| styles::mechanism_badge(s.mechanism)) {
            Some((badge, style)) => {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(badge, style));
            }
            None if spec.is_none() => {
                spans.push(Span::styled(" n/a", styles::text_muted()));
            }
            None => {}
        }

        let used: usize = spans.iter().map(|s| s.width()).sum();
        let room = (width as usize).saturating_sub(used + 2);
        if room > 8 && !app.description.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                truncate(&app.description, room),
                styles::text_muted(),
            ));
        }

        let line = Line::from(spans);
        if focused {
            line.style(styles::focused_selected())
        } else {
            line
        }
    }
}

fn category_row(
    name: &str,
    expanded: bool,
    selected: usize,
    total: usize,
    focused: bool,
) -> Line<'static> {
    let arrow = if expanded { "▾" } else { "▸" };
    let count_style = if selected > 0 {
        styles::checked()
    } else {
        styles::text_muted()
    };
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(arrow, styles::accent()),
        Span::raw(" "),
        Span::styled(name.to_string(), styles::accent_bold()),
        Span::styled(format!(" ({}/{})", selected, total), count_style),
    ]);
    if focused {
        line.style(styles::focused_selected())
    } else {
        line
    }
}

/// Cut `text` to `max` columns, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// First row to draw so `focused` stays on screen
fn scroll_offset(focused: Option<usize>, height: usize) -> usize {
    match focused {
        Some(row) if height > 0 && row >= height => row + 1 - height,
        _ => 0,
    }
}

impl Widget for CatalogList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(!self.state.focus.focus().is_idle())
            .title(" Apps ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (rows, focused) = self.rows(inner.width);
        if rows.is_empty() {
            let text = format!(" No apps match '{}'", self.state.search.query.trim());
            buf.set_line(
                inner.x,
                inner.y,
                &Line::styled(text, styles::text_muted()),
                inner.width,
            );
            return;
        }

        let offset = scroll_offset(focused, inner.height as usize);
        for (i, row) in rows
            .iter()
            .skip(offset)
            .take(inner.height as usize)
            .enumerate()
        {
            let y = inner.y + i as u16;
            if row.style.bg.is_some() {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), row.style);
            }
            buf.set_line(inner.x, y, row, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};
    use tuxmate_app::handler::update;
    use tuxmate_app::{Direction, Message};

    #[test]
    fn test_collapsed_catalog_lists_categories() {
        let state = test_state();
        let mut term = TestTerminal::new();
        term.render_widget(CatalogList::new(&state), term.area());

        assert!(term.buffer_contains("Web Browsers"));
        assert!(term.buffer_contains("Dev: Editors"));
        assert!(!term.buffer_contains("Firefox"));
    }

    #[test]
    fn test_expanded_category_shows_apps_and_marks() {
        let mut state = test_state();
        update(&mut state, Message::Navigate(Direction::Down));
        update(&mut state, Message::Activate);
        update(&mut state, Message::Activate);

        let mut term = TestTerminal::new();
        term.render_widget(CatalogList::new(&state), term.area());

        assert!(term.buffer_contains("▾ Web Browsers (1/4)"));
        assert!(term.buffer_contains("[✓] Firefox"));
        assert!(term.buffer_contains("[ ] Chromium n/a"));
    }

    #[test]
    fn test_badges_follow_active_distro() {
        let mut state = test_state();
        update(&mut state, Message::SetDistro("arch".into()));
        update(&mut state, Message::Navigate(Direction::Down));
        update(&mut state, Message::Activate);

        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(CatalogList::new(&state), term.area());

        assert!(term.buffer_contains("Brave AUR"));
    }

    #[test]
    fn test_empty_search_result_message() {
        let mut state = test_state();
        update(&mut state, Message::SearchInput { text: "zzz".into() });

        let mut term = TestTerminal::new();
        term.render_widget(CatalogList::new(&state), term.area());

        assert!(term.buffer_contains("No apps match 'zzz'"));
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 8), "a longe…");
    }

    #[test]
    fn test_scroll_keeps_focus_visible() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(3), 5), 0);
        assert_eq!(scroll_offset(Some(7), 5), 3);
    }
}
