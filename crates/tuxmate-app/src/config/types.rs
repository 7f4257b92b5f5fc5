//! Configuration types for tuxmate (`~/.config/tuxmate/config.toml`)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tuxmate_core::{AurHelper, HelperPolicy, JoinPolicies};

use crate::focus::WrapPolicy;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub generator: GeneratorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// General settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneralSettings {
    /// Distro selected at startup
    #[serde(default = "default_distro")]
    pub default_distro: String,

    /// Catalog file to use instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Directory downloaded scripts are written to (default: current dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_dir: Option<PathBuf>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            default_distro: default_distro(),
            catalog: None,
            script_dir: None,
        }
    }
}

fn default_distro() -> String {
    "ubuntu".to_string()
}

/// Keyboard navigation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Wrap from the last item to the first and back
    #[serde(default)]
    pub wrap: bool,

    /// Start with every category expanded
    #[serde(default)]
    pub start_expanded: bool,
}

impl NavigationSettings {
    pub fn wrap_policy(&self) -> WrapPolicy {
        if self.wrap {
            WrapPolicy::Wrap
        } else {
            WrapPolicy::Clamp
        }
    }
}

/// Install generation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub helper: AurHelper,

    #[serde(default)]
    pub has_helper_installed: bool,

    /// Per-family overrides: `snap = "strict"`, `apt = "continue"`
    #[serde(default)]
    pub join: JoinPolicies,
}

impl GeneratorSettings {
    pub fn helper_policy(&self) -> HelperPolicy {
        HelperPolicy::new(self.helper, self.has_helper_installed)
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Open the script preview panel at startup
    #[serde(default)]
    pub show_preview: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuxmate_core::{JoinPolicy, PackageManagerFamily};

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.general.default_distro, "ubuntu");
        assert!(settings.general.catalog.is_none());
        assert!(!settings.navigation.wrap);
        assert_eq!(settings.navigation.wrap_policy(), WrapPolicy::Clamp);
        assert_eq!(settings.generator.helper, AurHelper::Yay);
        assert!(!settings.ui.show_preview);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[navigation]
wrap = true

[generator]
helper = "paru"

[generator.join]
apt = "continue"
"#,
        )
        .unwrap();

        assert_eq!(settings.general.default_distro, "ubuntu");
        assert_eq!(settings.navigation.wrap_policy(), WrapPolicy::Wrap);
        assert_eq!(settings.generator.helper_policy().helper, AurHelper::Paru);
        assert_eq!(
            settings.generator.join.for_family(PackageManagerFamily::Apt),
            JoinPolicy::Continue
        );
        assert_eq!(
            settings.generator.join.for_family(PackageManagerFamily::Snap),
            JoinPolicy::Continue
        );
    }
}
