//! Bottom bar: the generated copy command, status feedback and shortcut hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use tuxmate_app::{StatusMessage, UiMode};
use tuxmate_core::{Generation, HelperPolicy};

use crate::theme::{palette, styles};

pub struct CommandBar<'a> {
    generation: &'a Generation,
    status: Option<&'a StatusMessage>,
    helper: HelperPolicy,
    mode: UiMode,
}

impl<'a> CommandBar<'a> {
    pub fn new(generation: &'a Generation, helper: HelperPolicy) -> Self {
        Self {
            generation,
            status: None,
            helper,
            mode: UiMode::Normal,
        }
    }

    pub fn status(mut self, status: Option<&'a StatusMessage>) -> Self {
        self.status = status;
        self
    }

    pub fn mode(mut self, mode: UiMode) -> Self {
        self.mode = mode;
        self
    }

    fn command_line(&self) -> Line<'a> {
        if self.generation.command.is_empty() {
            let hint = if self.generation.unavailable.is_empty() {
                "Select apps to build an install command"
            } else {
                "None of the selected apps are available on this distro"
            };
            return Line::styled(format!(" {}", hint), styles::text_muted());
        }
        Line::from(vec![
            Span::styled(" $ ", styles::accent_bold()),
            Span::styled(self.generation.command.as_str(), styles::text_primary()),
        ])
    }

    fn info_line(&self) -> Line<'a> {
        if let Some(status) = self.status {
            return Line::styled(format!(" {}", status.text), styles::status(status.kind));
        }

        let hints: &[(&str, &str)] = match self.mode {
            UiMode::SearchInput => &[("Enter", "keep"), ("Esc", "clear"), ("^U", "erase")],
            UiMode::AurPrompt => &[("Esc", "dismiss"), ("q", "quit")],
            UiMode::Normal => &[
                ("Space", "toggle"),
                ("/", "search"),
                ("s", "distro"),
                ("y", "copy"),
                ("d", "script"),
                ("c", "clear"),
                ("Tab", "preview"),
                ("q", "quit"),
            ],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }

        if self.generation.show_aur_ui {
            let installed = if self.helper.has_helper_installed {
                "yes"
            } else {
                "no"
            };
            spans.push(Span::styled("│ ", styles::text_muted()));
            spans.push(Span::styled(
                format!("helper: {} [1/2]  installed: {} [a]", self.helper.helper, installed),
                Style::default().fg(palette::AUR_BADGE),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.generation.included_count {
            0 => " Command ".to_string(),
            1 => " Command · 1 app ".to_string(),
            n => format!(" Command · {} apps ", n),
        };
        let block = styles::glass_block(false)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.command_line(), inner.width);
        if inner.height >= 2 {
            buf.set_line(inner.x, inner.y + 1, &self.info_line(), inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use tuxmate_core::AurHelper;

    fn render(bar: CommandBar<'_>) -> TestTerminal {
        let mut term = TestTerminal::with_size(160, 4);
        term.render_widget(bar, term.area());
        term
    }

    #[test]
    fn test_empty_generation_shows_hint() {
        let generation = Generation::default();
        let term = render(CommandBar::new(&generation, HelperPolicy::default()));

        assert!(term.buffer_contains("Select apps to build an install command"));
        assert!(term.buffer_contains("[q] quit"));
    }

    #[test]
    fn test_command_is_shown_with_count() {
        let generation = Generation {
            command: "sudo apt install -y vim".into(),
            included_count: 1,
            ..Default::default()
        };
        let term = render(CommandBar::new(&generation, HelperPolicy::default()));

        assert!(term.buffer_contains("$ sudo apt install -y vim"));
        assert!(term.buffer_contains("Command · 1 app"));
    }

    #[test]
    fn test_status_replaces_hints() {
        let generation = Generation::default();
        let status = StatusMessage::success("Command copied to clipboard");
        let term = render(
            CommandBar::new(&generation, HelperPolicy::default()).status(Some(&status)),
        );

        assert!(term.buffer_contains("Command copied to clipboard"));
        assert!(!term.buffer_contains("[q] quit"));
    }

    #[test]
    fn test_aur_controls_shown_with_aur_ui() {
        let generation = Generation {
            command: "yay -S spotify".into(),
            show_aur_ui: true,
            ..Default::default()
        };
        let helper = HelperPolicy::new(AurHelper::Paru, true);
        let term = render(CommandBar::new(&generation, helper));

        assert!(term.buffer_contains("helper: paru [1/2]  installed: yes [a]"));
    }
}
