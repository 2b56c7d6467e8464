//! touchctl - operator tool for the touchscreen gesture driver
//!
//! Lists the gestures the driver supports and toggles them from a shell,
//! using the same service core the host framework calls.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use touch::{TouchConfig, TouchscreenGesture};

#[derive(Parser)]
#[command(name = "touchctl", version, about = "Control touchscreen gestures")]
struct Cli {
    /// Config file to use instead of touch.json in the config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write commands to this node instead of the driver's control node
    #[arg(long, global = true)]
    control_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List supported gestures
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Enable a gesture by id
    Enable { id: i32 },
    /// Disable a gesture by id
    Disable { id: i32 },
    /// Write the effective settings to touch.json in the config directory
    DumpConfig,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the requested operation succeeded
fn run(cli: Cli) -> Result<bool> {
    let mut settings = match &cli.config {
        Some(path) => TouchConfig::from_file(path)?,
        None => TouchConfig::load()?,
    };
    if cli.control_path.is_some() {
        settings.control_path = cli.control_path;
    }

    match cli.command {
        Command::List { json } => {
            let service = TouchscreenGesture::from_config(&settings);
            let gestures = service.get_supported_gestures();
            if json {
                println!("{}", serde_json::to_string_pretty(&gestures)?);
            } else {
                println!("{:>3}  {:>8}  NAME", "ID", "KEYCODE");
                for g in gestures {
                    println!("{:>3}  {:>8}  {}", g.id, g.key_code, g.name);
                }
            }
            Ok(true)
        }
        Command::Enable { id } => toggle(&settings, id, true),
        Command::Disable { id } => toggle(&settings, id, false),
        Command::DumpConfig => {
            config::init()?;
            let path = settings.save().context("Failed to save touch config")?;
            info!("Wrote {}", path.display());
            Ok(true)
        }
    }
}

fn toggle(settings: &TouchConfig, id: i32, enabled: bool) -> Result<bool> {
    let service = TouchscreenGesture::from_config(settings);
    let state = if enabled { "enabled" } else { "disabled" };

    match service.try_set_gesture_enabled(id, enabled) {
        Ok(()) => {
            if let Some(def) = service.registry().get(id) {
                info!("{} {}", def.name, state);
            }
            Ok(true)
        }
        Err(e) => {
            error!("Gesture {} not {}: {}", id, state, e);
            Ok(false)
        }
    }
}
