//! Script preview panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct ScriptPreview<'a> {
    script: &'a str,
    filename: &'a str,
}

impl<'a> ScriptPreview<'a> {
    pub fn new(script: &'a str, filename: &'a str) -> Self {
        Self { script, filename }
    }
}

fn script_line(line: &str) -> Line<'_> {
    let style = if line.starts_with('#') {
        styles::text_muted()
    } else if line.contains("|| echo") {
        Style::default().fg(palette::STATUS_YELLOW)
    } else {
        styles::text_primary()
    };
    Line::from(Span::styled(line, style))
}

impl Widget for ScriptPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(format!(" {} ", self.filename))
            .style(Style::default().bg(palette::CARD_BG));

        let lines: Vec<Line<'_>> = if self.script.is_empty() {
            vec![Line::styled(" Nothing to install yet", styles::text_muted())]
        } else {
            self.script.lines().map(script_line).collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_preview_shows_script_and_filename() {
        let script = "#!/usr/bin/env bash\nset -e\nsudo pacman -S vim --needed --noconfirm\n";
        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(ScriptPreview::new(script, "tuxmate-arch.sh"), term.area());

        assert!(term.buffer_contains("tuxmate-arch.sh"));
        assert!(term.buffer_contains("set -e"));
        assert!(term.buffer_contains("sudo pacman -S vim"));
    }

    #[test]
    fn test_empty_preview_placeholder() {
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(ScriptPreview::new("", "tuxmate-ubuntu.sh"), term.area());

        assert!(term.buffer_contains("Nothing to install yet"));
    }

    #[test]
    fn test_comment_lines_are_muted() {
        assert_eq!(script_line("# Repository packages").style, Style::default());
        assert_eq!(
            script_line("# Repository packages").spans[0].style.fg,
            Some(palette::TEXT_MUTED)
        );
    }
}
