//! Radiocfg - Command line front end
//!
//! Loads a project file, runs edits through the derivation cascades,
//! validates the result and prints the derived radio configuration.

mod project;
mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use radiocfg_core::{
    apply_edit, radio_config_module, validate, Board, Edit, FrequencyBand, RfDefaults,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use project::{load_project, save_project, Project};

#[derive(Parser, Debug)]
#[command(name = "radiocfg")]
#[command(about = "Derived radio, network and power settings for 15.4 stack projects")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Vendor RF defaults file (TOML) replacing the built-in power tables
    #[arg(long, global = true)]
    rf_defaults: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a project file holding a board's defaults
    Defaults {
        #[arg(short, long)]
        board: Board,
        /// Project name; "collector" and "sensor" select the role
        #[arg(short, long, default_value = "collector")]
        project: String,
    },
    /// Validate a project, exiting non-zero on errors
    Check { project: PathBuf },
    /// Apply field=value edits in order
    Set {
        project: PathBuf,
        #[arg(required = true)]
        edits: Vec<String>,
        /// Write the result back instead of printing it
        #[arg(short, long)]
        write: bool,
    },
    /// Print the radio configuration module as JSON
    Radio { project: PathBuf },
    /// List supported boards
    Boards,
}

fn load_rf_defaults(path: Option<&Path>) -> Result<RfDefaults> {
    match path {
        Some(path) => {
            let defaults = RfDefaults::from_file(path)?;
            info!(
                path = %path.display(),
                version = %defaults.version,
                tables = defaults.table.len(),
                phys = defaults.phy.len(),
                "Loaded RF defaults"
            );
            Ok(defaults)
        }
        None => {
            let defaults = RfDefaults::builtin()?;
            debug!(version = %defaults.version, "Using built-in RF defaults");
            Ok(defaults)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Radiocfg v{}", env!("CARGO_PKG_VERSION"));

    let rf_defaults = load_rf_defaults(args.rf_defaults.as_deref())?;

    match args.command {
        Command::Defaults { board, project } => {
            let project = Project::new(board, &project, &rf_defaults)?;
            print!("{}", project.to_toml_string()?);
        }
        Command::Check { project: path } => {
            let project = load_project(&path, &rf_defaults)?;
            let report = validate(&project.record, &project.tables, &project.device);
            print!("{}", report::render(&report));
            if report.has_errors() {
                bail!("{} failed validation", path.display());
            }
        }
        Command::Set {
            project: path,
            edits,
            write,
        } => {
            let mut project = load_project(&path, &rf_defaults)?;
            for input in &edits {
                let edit = Edit::parse(input).with_context(|| format!("Invalid edit '{input}'"))?;
                apply_edit(&mut project.record, &project.tables, edit)
                    .with_context(|| format!("Cannot apply '{input}'"))?;
            }
            info!(edits = edits.len(), "Applied edits");

            if write {
                save_project(&path, &project)?;
            } else {
                print!("{}", project.to_toml_string()?);
            }
        }
        Command::Radio { project: path } => {
            let project = load_project(&path, &rf_defaults)?;
            let module = radio_config_module(&project.record, &project.tables)?;
            println!("{}", serde_json::to_string_pretty(&module)?);
        }
        Command::Boards => {
            for board in Board::ALL {
                let class = board.rf_class();
                let bands: Vec<&str> = FrequencyBand::ALL
                    .into_iter()
                    .filter(|band| class.supports(*band))
                    .map(|band| band.display_name())
                    .collect();
                let mut traits = Vec::new();
                if class.mhz433 {
                    traits.push("433 MHz");
                }
                if class.high_pa {
                    traits.push("high PA");
                }
                println!(
                    "{:<20} {:<22} {}",
                    board.launchpad_name(),
                    bands.join(", "),
                    traits.join(", ")
                );
            }
        }
    }

    Ok(())
}
