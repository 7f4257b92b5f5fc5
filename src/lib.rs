//! tuxmate Library
//!
//! Pick Linux apps from a catalog and get one command (or a bash script)
//! that installs them on the chosen distro. The interactive TUI lives in
//! `tuxmate-tui`; this crate wires the CLI inputs to it and provides the
//! headless `--print` and `--list` modes.

pub mod headless;
pub mod launch;

use tuxmate_app::config::PersistSettingsPlugin;
use tuxmate_app::TracingPlugin;
use tuxmate_core::prelude::*;

pub use headless::PrintFormat;
pub use launch::Launch;

/// Start the interactive TUI
pub fn run(launch: &Launch) -> Result<()> {
    info!("Starting TUI");

    let file_settings = launch.file_settings();
    let settings = launch.apply_overrides(file_settings.clone());
    let mut engine = launch.build_engine(settings)?;

    engine.register_plugin(Box::new(TracingPlugin));
    if let Some(dir) = launch.config_dir() {
        engine.register_plugin(Box::new(PersistSettingsPlugin::new(dir, file_settings)));
    }

    let result = tuxmate_tui::run(engine);
    match &result {
        Err(e) if e.is_fatal() => error!("Fatal error: {:?}", e),
        Err(e) => warn!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("tuxmate exiting");
    result
}

/// Generate once and return what `--print` writes to stdout
pub fn run_headless(launch: &Launch, format: PrintFormat) -> Result<String> {
    let settings = launch.apply_overrides(launch.file_settings());
    let engine = launch.build_engine(settings)?;
    headless::render(engine.state(), format)
}

/// What `--list` writes to stdout
pub fn run_list(launch: &Launch) -> Result<String> {
    let settings = launch.apply_overrides(launch.file_settings());
    let catalog = Launch::load_catalog(&settings)?;
    Ok(headless::list(&catalog))
}
