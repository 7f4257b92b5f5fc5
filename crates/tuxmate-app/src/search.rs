//! Search filter state
//!
//! The query narrows the navigation view and the rendered list. It never
//! touches the selection or the generated output.

use tuxmate_core::App;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn matches(&self, app: &App) -> bool {
        app.matches_query(&self.query)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }
}
