//! Remember the last distro and AUR helper answers across runs

use std::path::PathBuf;
use std::sync::Mutex;

use tuxmate_core::prelude::*;

use super::settings::save_settings;
use super::types::Settings;
use crate::engine_event::EngineEvent;
use crate::plugin::EnginePlugin;

/// Writes `config.toml` when the distro or helper choice changes
#[derive(Debug)]
pub struct PersistSettingsPlugin {
    config_dir: PathBuf,
    settings: Mutex<Settings>,
}

impl PersistSettingsPlugin {
    pub fn new(config_dir: PathBuf, settings: Settings) -> Self {
        Self {
            config_dir,
            settings: Mutex::new(settings),
        }
    }
}

impl EnginePlugin for PersistSettingsPlugin {
    fn name(&self) -> &str {
        "persist-settings"
    }

    fn on_event(&self, event: &EngineEvent) -> Result<()> {
        let mut settings = self
            .settings
            .lock()
            .map_err(|_| Error::config("settings lock poisoned"))?;

        match event {
            EngineEvent::DistroChanged { to, .. } => {
                settings.general.default_distro = to.as_str().to_string();
            }
            EngineEvent::HelperChanged {
                helper,
                has_helper_installed,
            } => {
                settings.generator.helper = *helper;
                settings.generator.has_helper_installed = *has_helper_installed;
            }
            _ => return Ok(()),
        }

        save_settings(&self.config_dir, &settings)
    }
}
