//! Two-step AUR helper prompt
//!
//! Shown when AUR apps are selected on a pacman distro: first "do you already
//! have a helper?", then "which one?". Once the user picks a helper or
//! dismisses the prompt it stays away until the selection is cleared.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AurPromptStage {
    #[default]
    Hidden,
    AskHasHelper,
    /// Answered the first question; `true` if a helper is already installed
    AskHelper { has_helper: bool },
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AurPromptState {
    pub stage: AurPromptStage,
    /// Picked a helper or dismissed; suppresses re-asking
    pub interacted: bool,
}

impl AurPromptState {
    pub fn is_open(&self) -> bool {
        matches!(
            self.stage,
            AurPromptStage::AskHasHelper | AurPromptStage::AskHelper { .. }
        )
    }

    /// Follow the AUR UI visibility after a state change
    pub fn sync(&mut self, show_aur_ui: bool) {
        self.stage = match (show_aur_ui, self.stage) {
            (false, AurPromptStage::Done) => AurPromptStage::Done,
            (false, _) => AurPromptStage::Hidden,
            (true, AurPromptStage::Hidden) if !self.interacted => AurPromptStage::AskHasHelper,
            (true, stage) => stage,
        };
    }

    pub fn answer_has_helper(&mut self, has_helper: bool) {
        if self.stage == AurPromptStage::AskHasHelper {
            self.stage = AurPromptStage::AskHelper { has_helper };
        }
    }

    pub fn helper_chosen(&mut self) {
        self.stage = AurPromptStage::Done;
        self.interacted = true;
    }

    pub fn dismiss(&mut self) {
        self.stage = AurPromptStage::Done;
        self.interacted = true;
    }

    /// Forget the user's answers; called when the selection is cleared
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
