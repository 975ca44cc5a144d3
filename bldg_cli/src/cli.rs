//! Command-line arguments for `bldg`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Residential building takeoff and code checks
#[derive(Parser, Debug)]
#[command(name = "bldg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in Maine Residence walkthrough
    #[command(name = "demo")]
    Demo,

    /// Validate and take off materials, producing a full report
    #[command(name = "calculate")]
    Calculate {
        /// Path to the project JSON file
        path: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run code compliance checks only
    #[command(name = "validate")]
    Validate {
        /// Path to the project JSON file
        path: PathBuf,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the bill of materials only
    #[command(name = "bom")]
    Bom {
        /// Path to the project JSON file
        path: PathBuf,

        /// Print the bill of materials as JSON
        #[arg(long)]
        json: bool,
    },
}
