//! tuxmate - pick Linux apps, get one install command
//!
//! This is the binary entry point. All logic lives in the library.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tuxmate::{Launch, PrintFormat};
use tuxmate_core::AurHelper;

/// tuxmate - pick Linux apps, get one install command
#[derive(Parser, Debug)]
#[command(name = "tuxmate", version)]
#[command(about = "Pick Linux apps from a catalog and get one command that installs them all", long_about = None)]
struct Args {
    /// Distro to generate for (e.g. ubuntu, arch, fedora)
    #[arg(long)]
    distro: Option<String>,

    /// Catalog file to use instead of the built-in one (.toml or .json)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Apps to preselect, comma separated
    #[arg(long, value_delimiter = ',', value_name = "ID,ID,..")]
    select: Vec<String>,

    /// AUR helper to use on pacman distros
    #[arg(long)]
    helper: Option<AurHelper>,

    /// The AUR helper is already installed; skip bootstrapping it
    #[arg(long)]
    has_helper: bool,

    /// Print the generated output and exit instead of starting the TUI
    #[arg(long, value_enum)]
    print: Option<PrintFormat>,

    /// List distros and apps and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn launch(&self) -> Launch {
        Launch {
            distro: self.distro.clone(),
            catalog: self.catalog.clone(),
            select: self.select.clone(),
            helper: self.helper,
            has_helper: self.has_helper,
            config_dir: None,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logs go to a file so stdout stays clean for the TUI and --print
    tuxmate_core::logging::init()?;

    let launch = args.launch();

    let output = if args.list {
        tuxmate::run_list(&launch)?
    } else if let Some(format) = args.print {
        tuxmate::run_headless(&launch, format)?
    } else {
        tuxmate::run(&launch)?;
        return Ok(());
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
