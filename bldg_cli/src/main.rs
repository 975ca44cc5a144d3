//! # bldg CLI
//!
//! Command-line front end for `bldg_core`: loads a project JSON file and
//! prints code findings, the bill of materials, or a full report.

mod cli;
mod commands;
mod demo;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    debug!("bldg v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("bldg v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Demo => demo::run(),
        Commands::Calculate { path, json, output } => {
            commands::calculate_report(&path, json, output.as_deref())
        }
        Commands::Validate { path, json } => commands::validate_project(&path, json),
        Commands::Bom { path, json } => commands::bill_of_materials(&path, json),
    }
}
