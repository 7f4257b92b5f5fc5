//! Selection store: the set of chosen app ids

use std::collections::BTreeSet;

use crate::catalog::Catalog;

/// Set of selected app ids
///
/// Membership survives distro switches: an app that is not packaged for the
/// active distro stays selected and is simply left out of generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`
    ///
    /// Returns the new membership, or `None` (and changes nothing) when the
    /// catalog does not know the id.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> Option<bool> {
        if !catalog.contains_app(id) {
            tracing::debug!("Ignoring toggle of unknown app '{}'", id);
            return None;
        }
        if self.ids.remove(id) {
            Some(false)
        } else {
            self.ids.insert(id.to_string());
            Some(true)
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn has(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
[[distros]]
id = "arch"
name = "Arch Linux"
family = "pacman"

[[categories]]
id = "editors"
name = "Editors"

[[apps]]
id = "vim"
name = "Vim"
category = "editors"
[apps.targets]
arch = "vim"

[[apps]]
id = "helix"
name = "Helix"
category = "editors"
[apps.targets]
arch = "helix"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_toggle_flips_membership() {
        let catalog = catalog();
        let mut selection = Selection::new();

        assert_eq!(selection.toggle(&catalog, "vim"), Some(true));
        assert!(selection.has("vim"));
        assert_eq!(selection.toggle(&catalog, "vim"), Some(false));
        assert!(!selection.has("vim"));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.toggle(&catalog, "helix");
        let before = selection.clone();

        selection.toggle(&catalog, "vim");
        selection.toggle(&catalog, "vim");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.toggle(&catalog, "vim");

        assert_eq!(selection.toggle(&catalog, "emacs"), None);
        assert_eq!(selection.count(), 1);
        assert!(!selection.has("emacs"));
    }

    #[test]
    fn test_clear_empties_selection() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.toggle(&catalog, "vim");
        selection.toggle(&catalog, "helix");
        assert_eq!(selection.count(), 2);

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.selected_ids().count(), 0);
    }
}
