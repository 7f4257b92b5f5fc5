//! Configuration file handling for tuxmate
//!
//! Supports `~/.config/tuxmate/config.toml` with `[general]`, `[navigation]`,
//! `[generator]` and `[ui]` sections. CLI flags override these values.

pub mod persist;
pub mod settings;
pub mod types;

pub use persist::PersistSettingsPlugin;
pub use settings::{config_dir, init_config, load_settings, save_settings};
pub use types::*;
