//! Floating card that asks about the AUR helper

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use tuxmate_app::aur_prompt::AurPromptStage;

use super::modal_overlay::centered_rect;
use crate::theme::styles;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 9;

pub struct AurPromptCard<'a> {
    stage: AurPromptStage,
    aur_apps: &'a [String],
}

impl<'a> AurPromptCard<'a> {
    pub fn new(stage: AurPromptStage, aur_apps: &'a [String]) -> Self {
        Self { stage, aur_apps }
    }

    fn choice(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
        vec![
            Span::styled("  [", styles::text_muted()),
            Span::styled(key, styles::keybinding()),
            Span::styled("] ", styles::text_muted()),
            Span::styled(label, styles::text_primary()),
        ]
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let apps = self.aur_apps.join(", ");
        let mut lines = vec![
            Line::styled(format!("From the AUR: {}", apps), styles::text_secondary()),
            Line::default(),
        ];

        match self.stage {
            AurPromptStage::AskHasHelper => {
                lines.push(Line::styled(
                    "Do you already have an AUR helper?",
                    styles::accent_bold(),
                ));
                let mut choices = Self::choice("y", "yes");
                choices.extend(Self::choice("n", "no, install one"));
                lines.push(Line::from(choices));
            }
            AurPromptStage::AskHelper { has_helper } => {
                let question = if has_helper {
                    "Which helper do you use?"
                } else {
                    "Which helper should be installed?"
                };
                lines.push(Line::styled(question, styles::accent_bold()));
                let mut choices = Self::choice("1", "yay");
                choices.extend(Self::choice("2", "paru"));
                lines.push(Line::from(choices));
            }
            AurPromptStage::Hidden | AurPromptStage::Done => {}
        }

        lines.push(Line::default());
        lines.push(Line::styled("[Esc] decide later", styles::text_muted()));
        lines
    }
}

impl Widget for AurPromptCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if matches!(self.stage, AurPromptStage::Hidden | AurPromptStage::Done) {
            return;
        }

        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        Clear.render(card, buf);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(styles::modal_block(" AUR packages "))
            .render(card, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_first_step_asks_about_installed_helper() {
        let apps = vec!["Spotify".to_string()];
        let mut term = TestTerminal::new();
        term.render_widget(
            AurPromptCard::new(AurPromptStage::AskHasHelper, &apps),
            term.area(),
        );

        assert!(term.buffer_contains("From the AUR: Spotify"));
        assert!(term.buffer_contains("Do you already have an AUR helper?"));
        assert!(term.buffer_contains("[y] yes"));
    }

    #[test]
    fn test_second_step_offers_helpers() {
        let apps = vec!["Spotify".to_string()];
        let mut term = TestTerminal::new();
        term.render_widget(
            AurPromptCard::new(AurPromptStage::AskHelper { has_helper: false }, &apps),
            term.area(),
        );

        assert!(term.buffer_contains("Which helper should be installed?"));
        assert!(term.buffer_contains("[1] yay"));
        assert!(term.buffer_contains("[2] paru"));
    }

    #[test]
    fn test_hidden_stage_draws_nothing() {
        let apps = Vec::new();
        let mut term = TestTerminal::new();
        term.render_widget(AurPromptCard::new(AurPromptStage::Done, &apps), term.area());

        assert!(!term.buffer_contains("AUR"));
    }
}
