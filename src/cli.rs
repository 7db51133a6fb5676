use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ScalingPreset, CONFIG_FILE_NAME};
use crate::io::OutputFormat;
use crate::samples::SampleProfile;

#[derive(Parser, Debug)]
#[command(name = "healthpredict")]
#[command(about = "Diabetes risk scoring from routine clinical measurements", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one patient or a batch of patients
    Predict {
        /// JSON file with one measurement object or an array of them
        /// (reads stdin when omitted or "-")
        #[arg(short, long, conflicts_with = "sample")]
        input: Option<PathBuf>,

        /// Score a built-in sample patient instead of reading input
        #[arg(long, value_enum)]
        sample: Option<SampleProfile>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .healthpredict.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the ensemble scaling of the loaded configuration
        #[arg(long, value_enum)]
        preset: Option<ScalingPreset>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        ///
        /// -v: Show loaded configuration source
        /// -vv: Show per-scorer probabilities
        /// -vvv: Show all debug information
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a configuration file holding the built-in tables
    Init {
        /// Where to write the file
        #[arg(long, default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Parse and validate a configuration file, listing every problem
    CheckConfig {
        /// Configuration file to check
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Predict { verbosity, .. } => *verbosity,
            _ => 0,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
