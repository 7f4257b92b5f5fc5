//! Core domain types for the app catalog

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a distribution (`"arch"`, `"ubuntu"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistroId(String);

impl DistroId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for DistroId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DistroId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Package manager convention a distribution uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerFamily {
    Apt,
    Pacman,
    Dnf,
    Zypper,
    Flatpak,
    Snap,
}

impl PackageManagerFamily {
    pub const ALL: [PackageManagerFamily; 6] = [
        PackageManagerFamily::Apt,
        PackageManagerFamily::Pacman,
        PackageManagerFamily::Dnf,
        PackageManagerFamily::Zypper,
        PackageManagerFamily::Flatpak,
        PackageManagerFamily::Snap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManagerFamily::Apt => "apt",
            PackageManagerFamily::Pacman => "pacman",
            PackageManagerFamily::Dnf => "dnf",
            PackageManagerFamily::Zypper => "zypper",
            PackageManagerFamily::Flatpak => "flatpak",
            PackageManagerFamily::Snap => "snap",
        }
    }

    /// Only the pacman family can install from the AUR
    pub fn supports_aur(&self) -> bool {
        matches!(self, PackageManagerFamily::Pacman)
    }
}

impl fmt::Display for PackageManagerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an app gets onto a distro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMechanism {
    /// Package from the distro's own repositories
    #[default]
    Repo,
    /// Arch User Repository package, needs a helper
    Aur,
    /// Cannot be expressed as a package manager call
    Manual,
}

/// Per-distro install metadata for an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallSpec {
    /// Package name(s), space-separated when several; rendered verbatim
    #[serde(default)]
    pub package: String,

    #[serde(default, rename = "via")]
    pub mechanism: InstallMechanism,

    /// Shell step that must succeed before the install line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite: Option<String>,

    /// Human instruction, used for manual installs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl InstallSpec {
    pub fn repo(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            mechanism: InstallMechanism::Repo,
            prerequisite: None,
            note: None,
        }
    }
}

/// A distribution the catalog can generate commands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distro {
    pub id: DistroId,
    pub name: String,
    pub family: PackageManagerFamily,
}

/// Ordered group of apps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// App ids in catalog order
    pub apps: Vec<String>,
}

/// An installable application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub targets: BTreeMap<DistroId, InstallSpec>,
}

impl App {
    pub fn spec_for(&self, distro: &DistroId) -> Option<&InstallSpec> {
        self.targets.get(distro)
    }

    /// Case-insensitive match against name, id and description
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}
