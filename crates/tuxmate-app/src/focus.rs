//! Keyboard focus navigation over categories and apps
//!
//! Focus is either idle, on a category header, or on an app row. An app can
//! only hold focus while its category is expanded; every transition that
//! collapses a category moves focus out of it, so the rule is kept here and
//! nowhere else.
//!
//! Navigation runs over a [`NavView`], the currently visible slice of the
//! catalog (search may hide apps and categories).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tuxmate_core::Catalog;

/// Directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Behaviour at the first/last row or category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    /// Stay on the boundary item
    #[default]
    Clamp,
    /// Jump from last to first and back
    Wrap,
}

/// What currently holds keyboard focus
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Idle,
    Category {
        id: String,
    },
    App {
        id: String,
        category: String,
    },
}

impl Focus {
    pub fn category(id: impl Into<String>) -> Self {
        Focus::Category { id: id.into() }
    }

    pub fn app(id: impl Into<String>, category: impl Into<String>) -> Self {
        Focus::App {
            id: id.into(),
            category: category.into(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Focus::Idle)
    }

    /// Focused category, or the category owning the focused app
    pub fn category_id(&self) -> Option<&str> {
        match self {
            Focus::Idle => None,
            Focus::Category { id } => Some(id),
            Focus::App { category, .. } => Some(category),
        }
    }

    pub fn app_id(&self) -> Option<&str> {
        match self {
            Focus::App { id, .. } => Some(id),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation view
// ─────────────────────────────────────────────────────────────────────────────

/// A visible category and its visible apps, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCategory {
    pub id: String,
    pub apps: Vec<String>,
}

/// Ordered visible categories the focus moves over
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavView {
    categories: Vec<NavCategory>,
}

impl NavView {
    pub fn new(categories: Vec<NavCategory>) -> Self {
        Self { categories }
    }

    /// Build the view for a search query; an empty query shows everything
    ///
    /// While a query is active, categories without a matching app are hidden.
    pub fn from_catalog(catalog: &Catalog, query: &str) -> Self {
        let filtering = !query.trim().is_empty();
        let categories = catalog
            .categories()
            .iter()
            .filter_map(|category| {
                let apps: Vec<String> = catalog
                    .apps_in(&category.id)
                    .filter(|app| app.matches_query(query))
                    .map(|app| app.id.clone())
                    .collect();
                if filtering && apps.is_empty() {
                    None
                } else {
                    Some(NavCategory {
                        id: category.id.clone(),
                        apps,
                    })
                }
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> &[NavCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == category)
    }

    pub fn contains_app(&self, category: &str, app: &str) -> bool {
        self.position(category)
            .is_some_and(|i| self.categories[i].apps.iter().any(|a| a == app))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Focus state machine
// ─────────────────────────────────────────────────────────────────────────────

/// Side effect of a focus transition the caller has to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEffect {
    None,
    Expanded(String),
    Collapsed(String),
    /// Activate on an app: flip its selection
    ToggleApp(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Header(usize),
    App(usize, usize),
}

/// Focus plus the expanded categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    focus: Focus,
    expanded: BTreeSet<String>,
    wrap: WrapPolicy,
}

impl FocusState {
    pub fn new(wrap: WrapPolicy) -> Self {
        Self {
            wrap,
            ..Self::default()
        }
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded.contains(category)
    }

    pub fn expand_all<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded.extend(categories.into_iter().map(Into::into));
    }

    /// Expand or collapse a category
    ///
    /// Collapsing the category of the focused app moves focus to its header.
    pub fn set_expanded(&mut self, category: &str, expanded: bool) -> FocusEffect {
        if expanded {
            return if self.expanded.insert(category.to_string()) {
                FocusEffect::Expanded(category.to_string())
            } else {
                FocusEffect::None
            };
        }

        if !self.expanded.remove(category) {
            return FocusEffect::None;
        }
        if matches!(&self.focus, Focus::App { category: c, .. } if c == category) {
            self.focus = Focus::category(category);
        }
        FocusEffect::Collapsed(category.to_string())
    }

    pub fn toggle_expanded(&mut self, category: &str) -> FocusEffect {
        let expand = !self.is_expanded(category);
        self.set_expanded(category, expand)
    }

    /// Drop focus (Esc)
    pub fn clear(&mut self) {
        self.focus = Focus::Idle;
    }

    /// Move focus in `direction`
    ///
    /// From idle any direction lands on the first visible category.
    pub fn navigate(&mut self, view: &NavView, direction: Direction) -> FocusEffect {
        self.reconcile(view);
        let Some(first) = view.categories.first() else {
            return FocusEffect::None;
        };
        if self.focus.is_idle() {
            self.focus = Focus::category(&first.id);
            return FocusEffect::None;
        }

        match direction {
            Direction::Up => {
                self.step_row(view, -1);
                FocusEffect::None
            }
            Direction::Down => {
                self.step_row(view, 1);
                FocusEffect::None
            }
            Direction::Right => self.move_into_or_past(view),
            Direction::Left => {
                self.move_out_or_back(view);
                FocusEffect::None
            }
        }
    }

    /// Activate the focused item
    ///
    /// On a category: toggle expansion, focusing its first app when it opens.
    /// On an app: ask the caller to toggle its selection; focus stays.
    pub fn activate(&mut self, view: &NavView) -> FocusEffect {
        self.reconcile(view);
        match self.focus.clone() {
            Focus::Idle => FocusEffect::None,
            Focus::Category { id } => {
                if self.is_expanded(&id) {
                    return self.set_expanded(&id, false);
                }
                let effect = self.set_expanded(&id, true);
                if let Some(first) = view.position(&id).and_then(|i| view.categories[i].apps.first()) {
                    self.focus = Focus::app(first, &id);
                }
                effect
            }
            Focus::App { id, .. } => FocusEffect::ToggleApp(id),
        }
    }

    /// Repair focus after the view changed
    ///
    /// A hidden app falls back to its category header, a hidden category to idle.
    pub fn reconcile(&mut self, view: &NavView) {
        let next = match &self.focus {
            Focus::Idle => return,
            Focus::Category { id } if view.position(id).is_none() => Focus::Idle,
            Focus::Category { .. } => return,
            Focus::App { id, category } => match view.position(category) {
                None => Focus::Idle,
                Some(_) if self.is_expanded(category) && view.contains_app(category, id) => return,
                Some(_) => Focus::category(category.clone()),
            },
        };
        tracing::debug!("Focus reconciled: {:?} -> {:?}", self.focus, next);
        self.focus = next;
    }

    // ─────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────

    /// Header rows, plus app rows of expanded categories
    fn rows(&self, view: &NavView) -> Vec<Row> {
        let mut rows = Vec::new();
        for (ci, category) in view.categories.iter().enumerate() {
            rows.push(Row::Header(ci));
            if self.is_expanded(&category.id) {
                rows.extend((0..category.apps.len()).map(|ai| Row::App(ci, ai)));
            }
        }
        rows
    }

    fn current_row(&self, view: &NavView, rows: &[Row]) -> Option<usize> {
        rows.iter().position(|row| match (row, &self.focus) {
            (Row::Header(ci), Focus::Category { id }) => view.categories[*ci].id == *id,
            (Row::App(ci, ai), Focus::App { id, category }) => {
                let c = &view.categories[*ci];
                c.id == *category && c.apps[*ai] == *id
            }
            _ => false,
        })
    }

    fn focus_row(&mut self, view: &NavView, row: Row) {
        self.focus = match row {
            Row::Header(ci) => Focus::category(&view.categories[ci].id),
            Row::App(ci, ai) => {
                let c = &view.categories[ci];
                Focus::app(&c.apps[ai], &c.id)
            }
        };
    }

    fn step_row(&mut self, view: &NavView, delta: isize) {
        let rows = self.rows(view);
        let Some(current) = self.current_row(view, &rows) else {
            return;
        };
        let next = step(current, delta, rows.len(), self.wrap);
        self.focus_row(view, rows[next]);
    }

    fn move_into_or_past(&mut self, view: &NavView) -> FocusEffect {
        match self.focus.clone() {
            Focus::Idle => FocusEffect::None,
            Focus::Category { id } => {
                let Some(first) = view.position(&id).and_then(|i| view.categories[i].apps.first()) else {
                    return FocusEffect::None;
                };
                let first = first.clone();
                let effect = self.set_expanded(&id, true);
                self.focus = Focus::app(first, id);
                effect
            }
            Focus::App { category, .. } => {
                self.jump_category(view, &category, 1);
                FocusEffect::None
            }
        }
    }

    fn move_out_or_back(&mut self, view: &NavView) {
        match self.focus.clone() {
            Focus::Idle => {}
            Focus::App { category, .. } => self.focus = Focus::category(category),
            Focus::Category { id } => self.jump_category(view, &id, -1),
        }
    }

    fn jump_category(&mut self, view: &NavView, from: &str, delta: isize) {
        let Some(current) = view.position(from) else {
            return;
        };
        let next = step(current, delta, view.categories.len(), self.wrap);
        if next != current {
            self.focus = Focus::category(&view.categories[next].id);
        }
    }
}

/// Index `delta` away from `current` in a list of `len` items
fn step(current: usize, delta: isize, len: usize, wrap: WrapPolicy) -> usize {
    let target = current as isize + delta;
    if target < 0 {
        match wrap {
            WrapPolicy::Clamp => 0,
            WrapPolicy::Wrap => len - 1,
        }
    } else if target as usize >= len {
        match wrap {
            WrapPolicy::Clamp => len - 1,
            WrapPolicy::Wrap => 0,
        }
    } else {
        target as usize
    }
}
