//! AUR helper policy for pacman distros

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// AUR helper used to install AUR packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AurHelper {
    #[default]
    Yay,
    Paru,
}

impl AurHelper {
    pub const ALL: [AurHelper; 2] = [AurHelper::Yay, AurHelper::Paru];

    /// Executable name, also the AUR package and git repository name
    pub fn command(&self) -> &'static str {
        match self {
            AurHelper::Yay => "yay",
            AurHelper::Paru => "paru",
        }
    }

    /// Shell steps that build and install the helper from the AUR
    ///
    /// Clones into `/tmp/<helper>` and removes the checkout before and after,
    /// so a stale directory from an earlier run never breaks the clone.
    pub fn bootstrap_steps(&self) -> Vec<String> {
        let name = self.command();
        let dir = format!("/tmp/{name}");
        vec![
            "sudo pacman -S git base-devel --needed --noconfirm".to_string(),
            format!("rm -rf {dir}"),
            format!("git clone https://aur.archlinux.org/{name}.git {dir}"),
            format!("(cd {dir} && makepkg -si --noconfirm)"),
            format!("rm -rf {dir}"),
        ]
    }

    /// Install line for AUR packages
    pub fn install_line(&self, packages: &str) -> String {
        format!("{} -S {} --needed --noconfirm", self.command(), packages)
    }
}

impl fmt::Display for AurHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for AurHelper {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yay" => Ok(AurHelper::Yay),
            "paru" => Ok(AurHelper::Paru),
            other => Err(format!("unknown AUR helper '{other}' (expected yay or paru)")),
        }
    }
}

/// User's answer to "do you have a helper, and which one?"
///
/// Only consulted when the active distro is pacman-based and the selection
/// contains at least one AUR app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HelperPolicy {
    pub has_helper_installed: bool,
    pub helper: AurHelper,
}

impl HelperPolicy {
    pub fn new(helper: AurHelper, has_helper_installed: bool) -> Self {
        Self {
            has_helper_installed,
            helper,
        }
    }

    /// Whether the helper must be built before AUR packages can be installed
    pub fn needs_bootstrap(&self, has_aur_packages: bool) -> bool {
        has_aur_packages && !self.has_helper_installed
    }
}
