//! Per-family package manager conventions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::PackageManagerFamily;

/// How the install invocations of one group are chained in the copy command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
    /// One failing package stops the whole command (`&&`)
    #[default]
    Strict,
    /// Each package is installed on its own; failures are reported and skipped (`;`)
    Continue,
}

/// Join policy per family, with overrides from settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinPolicies {
    overrides: BTreeMap<PackageManagerFamily, JoinPolicy>,
}

impl JoinPolicies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, family: PackageManagerFamily, policy: JoinPolicy) -> Self {
        self.overrides.insert(family, policy);
        self
    }

    pub fn set(&mut self, family: PackageManagerFamily, policy: JoinPolicy) {
        self.overrides.insert(family, policy);
    }

    /// Effective policy: the override if any, else the family's default
    pub fn for_family(&self, family: PackageManagerFamily) -> JoinPolicy {
        self.overrides
            .get(&family)
            .copied()
            .unwrap_or_else(|| FamilyConvention::for_family(family).default_join)
    }
}

/// Shell conventions of one package manager family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyConvention {
    pub family: PackageManagerFamily,
    /// Index refresh emitted before the repository install line
    pub refresh: Option<&'static str>,
    pub install_prefix: &'static str,
    pub install_suffix: Option<&'static str>,
    /// Whether one invocation can take several packages
    pub batch: bool,
    pub default_join: JoinPolicy,
}

impl FamilyConvention {
    pub fn for_family(family: PackageManagerFamily) -> Self {
        use PackageManagerFamily::*;

        let (refresh, install_prefix, install_suffix, batch, default_join) = match family {
            Apt => (
                Some("sudo apt update"),
                "sudo apt install -y",
                None,
                true,
                JoinPolicy::Strict,
            ),
            Pacman => (
                None,
                "sudo pacman -S",
                Some("--needed --noconfirm"),
                true,
                JoinPolicy::Strict,
            ),
            Dnf => (None, "sudo dnf install -y", None, true, JoinPolicy::Strict),
            Zypper => (
                Some("sudo zypper refresh"),
                "sudo zypper install -y",
                None,
                true,
                JoinPolicy::Strict,
            ),
            Flatpak => (
                Some("flatpak remote-add --if-not-exists flathub https://dl.flathub.org/repo/flathub.flatpakrepo"),
                "flatpak install flathub -y",
                None,
                true,
                JoinPolicy::Strict,
            ),
            Snap => (None, "sudo snap install", None, false, JoinPolicy::Continue),
        };

        Self {
            family,
            refresh,
            install_prefix,
            install_suffix,
            batch,
            default_join,
        }
    }

    /// Native install invocation for a space-separated package list
    pub fn install_line(&self, packages: &str) -> String {
        match self.install_suffix {
            Some(suffix) => format!("{} {} {}", self.install_prefix, packages, suffix),
            None => format!("{} {}", self.install_prefix, packages),
        }
    }
}
