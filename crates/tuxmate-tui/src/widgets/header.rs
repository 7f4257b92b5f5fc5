//! Header bar with title, selection count and distro tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use tuxmate_core::{Distro, DistroId};

use crate::theme::{palette, styles};

/// Title row plus one tab per distro, the active one highlighted
pub struct MainHeader<'a> {
    distros: &'a [Distro],
    active: &'a DistroId,
    selected_count: usize,
}

impl<'a> MainHeader<'a> {
    pub fn new(distros: &'a [Distro], active: &'a DistroId) -> Self {
        Self {
            distros,
            active,
            selected_count: 0,
        }
    }

    pub fn selected_count(mut self, count: usize) -> Self {
        self.selected_count = count;
        self
    }

    fn title_line(&self) -> Line<'static> {
        let family = self
            .distros
            .iter()
            .find(|d| &d.id == self.active)
            .map(|d| d.family.as_str())
            .unwrap_or("?");

        let count_style = if self.selected_count > 0 {
            styles::checked()
        } else {
            styles::text_muted()
        };

        Line::from(vec![
            Span::raw(" "),
            Span::styled("tuxmate", styles::accent_bold()),
            Span::styled(" / ", styles::text_muted()),
            Span::styled(family.to_string(), styles::text_secondary()),
            Span::raw("  "),
            Span::styled(format!("{} selected", self.selected_count), count_style),
        ])
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, distro) in self.distros.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let style = if &distro.id == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", distro.name), style));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.title_line(), inner.width);
        if inner.height >= 2 {
            buf.set_line(inner.x, inner.y + 1, &self.tabs_line(), inner.width);
        }
    }
}
