//! Startup inputs: config file, CLI overrides, catalog and initial selection

use std::path::PathBuf;
use std::sync::Arc;

use tuxmate_app::config::{self, Settings};
use tuxmate_app::{Engine, Message};
use tuxmate_core::prelude::*;
use tuxmate_core::{AurHelper, Catalog, DistroId};

/// What the user asked for on the command line
#[derive(Debug, Clone, Default)]
pub struct Launch {
    pub distro: Option<String>,
    pub catalog: Option<PathBuf>,
    /// App ids to preselect
    pub select: Vec<String>,
    pub helper: Option<AurHelper>,
    /// `--has-helper`; only ever turns the setting on
    pub has_helper: bool,
    /// Overrides the platform config directory
    pub config_dir: Option<PathBuf>,
}

impl Launch {
    pub fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone().or_else(config::config_dir)
    }

    /// Settings from the config file, writing a commented default on first run
    pub fn file_settings(&self) -> Settings {
        let Some(dir) = self.config_dir() else {
            warn!("No config directory on this platform, using defaults");
            return Settings::default();
        };
        if !dir.join("config.toml").exists() {
            if let Err(e) = config::init_config(&dir) {
                warn!("Could not write default config: {}", e);
            }
        }
        config::load_settings(&dir)
    }

    /// File settings with the command line applied on top
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(distro) = &self.distro {
            settings.general.default_distro = distro.clone();
        }
        if let Some(catalog) = &self.catalog {
            settings.general.catalog = Some(catalog.clone());
        }
        if let Some(helper) = self.helper {
            settings.generator.helper = helper;
        }
        if self.has_helper {
            settings.generator.has_helper_installed = true;
        }
        settings
    }

    pub fn load_catalog(settings: &Settings) -> Result<Catalog> {
        match &settings.general.catalog {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Catalog::load(path)
            }
            None => Catalog::builtin(),
        }
    }

    /// Build an engine with the preselected apps already toggled on
    pub fn build_engine(&self, settings: Settings) -> Result<Engine> {
        let catalog = Arc::new(Self::load_catalog(&settings)?);

        if let Some(distro) = &self.distro {
            if catalog.distro(&DistroId::from(distro.as_str())).is_none() {
                warn!("Unknown distro '{}' on the command line", distro);
            }
        }

        let mut engine = Engine::new(catalog.clone(), settings);
        for id in &self.select {
            if !catalog.contains_app(id) {
                warn!("Ignoring unknown app '{}'", id);
                continue;
            }
            if !engine.state().selection.has(id) {
                engine.process_message(Message::ToggleApp(id.clone()));
            }
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_run_writes_default_config() {
        let temp = tempdir().unwrap();
        let launch = Launch {
            config_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let settings = launch.file_settings();

        assert_eq!(settings, Settings::default());
        assert!(temp.path().join("config.toml").exists());
    }

    #[test]
    fn test_cli_overrides_settings() {
        let launch = Launch {
            distro: Some("arch".into()),
            helper: Some(AurHelper::Paru),
            has_helper: true,
            ..Default::default()
        };

        let settings = launch.apply_overrides(Settings::default());

        assert_eq!(settings.general.default_distro, "arch");
        assert_eq!(settings.generator.helper, AurHelper::Paru);
        assert!(settings.generator.has_helper_installed);
    }

    #[test]
    fn test_preselection_skips_unknown_and_duplicates() {
        let launch = Launch {
            select: vec!["vim".into(), "nope".into(), "vim".into(), "git".into()],
            ..Default::default()
        };

        let engine = launch.build_engine(Settings::default()).unwrap();
        let selection = &engine.state().selection;

        assert_eq!(selection.count(), 2);
        assert!(selection.has("vim"));
        assert!(selection.has("git"));
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let launch = Launch {
            catalog: Some(PathBuf::from("/nonexistent/catalog.toml")),
            ..Default::default()
        };
        let settings = launch.apply_overrides(Settings::default());

        assert!(launch.build_engine(settings).is_err());
    }
}
