//! Headless mode - print the generated output instead of starting the TUI
//!
//! `--print command` and `--print script` write the text exactly as the TUI
//! would copy or save it. `--print json` writes one object with every output,
//! for scripts and tests that want the AUR flags too.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;
use tuxmate_app::AppState;
use tuxmate_core::prelude::*;
use tuxmate_core::{Catalog, Generation};

/// What `--print` writes to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    /// The one-line copy command
    Command,
    /// The downloadable bash script
    Script,
    /// Everything, as a JSON object
    Json,
}

#[derive(Debug, Serialize)]
struct HeadlessOutput<'a> {
    distro: &'a str,
    selected: Vec<&'a str>,
    #[serde(flatten)]
    generation: Generation,
}

/// Render the current generation for stdout
pub fn render(state: &AppState, format: PrintFormat) -> Result<String> {
    let generation = state.generation();
    for name in &generation.unavailable {
        warn!("{} is not available on {}", name, state.distro);
    }

    let out = match format {
        PrintFormat::Command if generation.command.is_empty() => String::new(),
        PrintFormat::Command => format!("{}\n", generation.command),
        PrintFormat::Script => generation.script,
        PrintFormat::Json => {
            let output = HeadlessOutput {
                distro: state.distro.as_str(),
                selected: state.selection.selected_ids().collect(),
                generation,
            };
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

/// Distros, then apps by category with the distros each one supports
pub fn list(catalog: &Catalog) -> String {
    let mut out = String::from("Distros:\n");
    for distro in catalog.distros() {
        let _ = writeln!(
            out,
            "  {:<10} {} ({})",
            distro.id,
            distro.name,
            distro.family.as_str()
        );
    }

    for category in catalog.categories() {
        let _ = writeln!(out, "\n{}:", category.name);
        for app in catalog.apps_in(&category.id) {
            let targets: Vec<&str> = app.targets.keys().map(|d| d.as_str()).collect();
            let _ = writeln!(out, "  {:<14} {:<18} {}", app.id, app.name, targets.join(","));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tuxmate_app::handler::update;
    use tuxmate_app::Message;

    fn state_with(distro: &str, apps: &[&str]) -> AppState {
        let mut state = AppState::new(Arc::new(Catalog::builtin().unwrap()));
        update(&mut state, Message::SetDistro(distro.into()));
        for app in apps {
            update(&mut state, Message::ToggleApp(app.to_string()));
        }
        state
    }

    #[test]
    fn test_empty_selection_prints_nothing() {
        let state = state_with("ubuntu", &[]);
        assert_eq!(render(&state, PrintFormat::Command).unwrap(), "");
        assert_eq!(render(&state, PrintFormat::Script).unwrap(), "");
    }

    #[test]
    fn test_command_ends_with_newline() {
        let state = state_with("ubuntu", &["vim"]);
        let out = render(&state, PrintFormat::Command).unwrap();
        assert!(out.ends_with('\n'));
        assert!(out.contains("vim"));
    }

    #[test]
    fn test_json_contains_all_outputs() {
        let state = state_with("arch", &["vim", "spotify"]);
        let out = render(&state, PrintFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["distro"], "arch");
        assert_eq!(value["has_aur_packages"], true);
        assert_eq!(value["aur_app_names"][0], "Spotify");
        assert!(value["command"].as_str().unwrap().contains("pacman -S"));
        assert!(value["script"].as_str().unwrap().starts_with("#!/usr/bin/env bash"));
    }

    #[test]
    fn test_list_shows_distros_and_apps() {
        let out = list(&Catalog::builtin().unwrap());
        assert!(out.starts_with("Distros:\n"));
        assert!(out.contains("arch"));
        assert!(out.contains("Dev: Editors:"));
        assert!(out.contains("Sublime Text"));
    }
}
