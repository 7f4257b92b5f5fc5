//! Install command and script generation
//!
//! Generation is a pure function of (catalog, distro, selection, helper
//! policy, join policies). Both output shapes are rendered from the same
//! [`InstallPlan`], so the copy command and the downloadable script can never
//! disagree about what gets installed.

mod command;
mod convention;
mod script;

pub use convention::{FamilyConvention, JoinPolicies, JoinPolicy};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::helper::{AurHelper, HelperPolicy};
use crate::selection::Selection;
use crate::types::{App, Distro, DistroId, InstallMechanism, InstallSpec, PackageManagerFamily};

/// Filename offered when downloading the script
pub fn script_filename(distro: &DistroId) -> String {
    format!("tuxmate-{}.sh", distro)
}

// ─────────────────────────────────────────────────────────────────────────────
// Partition
// ─────────────────────────────────────────────────────────────────────────────

/// A selected app resolved against the active distro
#[derive(Debug, Clone, Copy)]
pub struct PlannedApp<'a> {
    pub app: &'a App,
    pub spec: &'a InstallSpec,
}

/// Selected apps grouped by install mechanism, each group in catalog order
#[derive(Debug, Clone, Default)]
pub struct Partition<'a> {
    pub repo: Vec<PlannedApp<'a>>,
    pub aur: Vec<PlannedApp<'a>>,
    pub manual: Vec<PlannedApp<'a>>,
    /// Names of selected apps with no install spec for the distro
    pub unavailable: Vec<String>,
}

impl Partition<'_> {
    pub fn has_aur_packages(&self) -> bool {
        !self.aur.is_empty()
    }

    /// Apps that appear in the output (installable or manual)
    pub fn included_count(&self) -> usize {
        self.repo.len() + self.aur.len() + self.manual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included_count() == 0
    }
}

/// Split the selection into install groups for `distro`
///
/// Iterates the catalog rather than the selection, so group order is catalog
/// order no matter in which order apps were toggled.
pub fn partition<'a>(catalog: &'a Catalog, distro: &DistroId, selection: &Selection) -> Partition<'a> {
    let supports_aur = catalog
        .distro(distro)
        .is_some_and(|d| d.family.supports_aur());

    let mut partition = Partition::default();
    for app in catalog.apps().filter(|app| selection.has(&app.id)) {
        let Some(spec) = app.spec_for(distro) else {
            partition.unavailable.push(app.name.clone());
            continue;
        };
        let planned = PlannedApp { app, spec };
        match spec.mechanism {
            InstallMechanism::Repo => partition.repo.push(planned),
            InstallMechanism::Aur if supports_aur => partition.aur.push(planned),
            InstallMechanism::Aur => partition.unavailable.push(app.name.clone()),
            InstallMechanism::Manual => partition.manual.push(planned),
        }
    }
    partition
}

// ─────────────────────────────────────────────────────────────────────────────
// Install plan
// ─────────────────────────────────────────────────────────────────────────────

/// One package manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InstallLine {
    pub line: String,
    /// Packages the line installs, for failure messages
    pub packages: String,
}

/// Install invocations of one group plus how they chain
#[derive(Debug, Clone, Default)]
pub(crate) struct InstallGroup {
    pub lines: Vec<InstallLine>,
    pub join: JoinPolicy,
}

impl InstallGroup {
    fn build(
        apps: &[PlannedApp<'_>],
        batch: bool,
        join: JoinPolicy,
        line_for: impl Fn(&str) -> String,
    ) -> Self {
        if apps.is_empty() {
            return Self::default();
        }

        let lines = if batch && join == JoinPolicy::Strict {
            let packages = apps
                .iter()
                .map(|p| p.spec.package.trim())
                .collect::<Vec<_>>()
                .join(" ");
            vec![InstallLine {
                line: line_for(&packages),
                packages,
            }]
        } else {
            apps.iter()
                .map(|p| {
                    let packages = p.spec.package.trim().to_string();
                    InstallLine {
                        line: line_for(&packages),
                        packages,
                    }
                })
                .collect()
        };

        Self { lines, join }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Manual instruction rendered as a script comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ManualEntry {
    pub name: String,
    pub instruction: String,
}

/// Everything both renderers need, already ordered
#[derive(Debug, Clone)]
pub(crate) struct InstallPlan {
    pub distro_name: String,
    pub distro_id: DistroId,
    pub included_count: usize,
    pub prerequisites: Vec<String>,
    pub refresh: Option<String>,
    pub helper: AurHelper,
    pub bootstrap: Vec<String>,
    pub repo: InstallGroup,
    pub aur: InstallGroup,
    pub manual: Vec<ManualEntry>,
}

impl InstallPlan {
    fn build(
        distro: &Distro,
        partition: &Partition<'_>,
        policy: &HelperPolicy,
        joins: &JoinPolicies,
    ) -> Self {
        let convention = FamilyConvention::for_family(distro.family);
        let join = joins.for_family(distro.family);

        // Distinct prerequisites in catalog order of first use
        let mut prerequisites: Vec<String> = Vec::new();
        for planned in partition.repo.iter().chain(&partition.aur) {
            if let Some(step) = &planned.spec.prerequisite {
                if !prerequisites.contains(step) {
                    prerequisites.push(step.clone());
                }
            }
        }

        let refresh = if partition.repo.is_empty() {
            None
        } else {
            convention.refresh.map(str::to_string)
        };

        let bootstrap = if policy.needs_bootstrap(partition.has_aur_packages()) {
            policy.helper.bootstrap_steps()
        } else {
            Vec::new()
        };

        let repo = InstallGroup::build(&partition.repo, convention.batch, join, |pkgs| {
            convention.install_line(pkgs)
        });
        let aur = InstallGroup::build(&partition.aur, true, join, |pkgs| {
            policy.helper.install_line(pkgs)
        });

        let manual = partition
            .manual
            .iter()
            .map(|planned| ManualEntry {
                name: planned.app.name.clone(),
                instruction: match planned.spec.note.as_deref().map(str::trim) {
                    Some(note) if !note.is_empty() => note.to_string(),
                    _ => format!("install '{}' manually", planned.spec.package.trim()),
                },
            })
            .collect();

        Self {
            distro_name: distro.name.clone(),
            distro_id: distro.id.clone(),
            included_count: partition.included_count(),
            prerequisites,
            refresh,
            helper: policy.helper,
            bootstrap,
            repo,
            aur,
            manual,
        }
    }

    pub fn has_install_lines(&self) -> bool {
        !self.repo.is_empty() || !self.aur.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Derived output for the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Generation {
    /// Single-line copy command; empty when nothing is installable
    pub command: String,
    /// Full bash script; empty when nothing is included
    pub script: String,
    pub has_aur_packages: bool,
    /// Pacman distro with AUR apps selected: show the helper controls
    pub show_aur_ui: bool,
    pub aur_app_names: Vec<String>,
    pub included_count: usize,
    pub unavailable: Vec<String>,
}

/// Generate the copy command and the script for `selection` on `distro`
///
/// Total: unknown distros, unknown ids and empty selections all produce empty
/// output instead of an error.
pub fn generate(
    catalog: &Catalog,
    distro: &DistroId,
    selection: &Selection,
    policy: &HelperPolicy,
    joins: &JoinPolicies,
) -> Generation {
    let partition = partition(catalog, distro, selection);
    let has_aur_packages = partition.has_aur_packages();
    let aur_app_names = partition.aur.iter().map(|p| p.app.name.clone()).collect();

    let Some(distro) = catalog.distro(distro) else {
        return Generation {
            unavailable: partition.unavailable,
            ..Generation::default()
        };
    };

    let show_aur_ui = distro.family == PackageManagerFamily::Pacman && has_aur_packages;

    if partition.is_empty() {
        return Generation {
            has_aur_packages,
            show_aur_ui,
            aur_app_names,
            unavailable: partition.unavailable,
            ..Generation::default()
        };
    }

    let plan = InstallPlan::build(distro, &partition, policy, joins);
    Generation {
        command: command::render(&plan),
        script: script::render(&plan),
        has_aur_packages,
        show_aur_ui,
        aur_app_names,
        included_count: plan.included_count,
        unavailable: partition.unavailable,
    }
}
