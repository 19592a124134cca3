//! Command-line arguments

use clap::{Parser, Subcommand};

use crate::render::OutputStyle;

#[derive(Debug, Parser)]
#[command(name = "focusstat")]
#[command(about = "Decode focuser daemon status codes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Describe command result codes
    Command {
        /// Result codes returned by the daemon or client
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i32>,

        /// Exit with failure if any code is unknown
        #[arg(long)]
        strict: bool,
    },

    /// Label focuser state codes
    Focuser {
        /// Device state codes
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i32>,

        /// Markup style (defaults to the configured style)
        #[arg(long, value_enum)]
        style: Option<OutputStyle>,
    },

    /// List every known code
    List {
        /// Markup style for focuser labels
        #[arg(long, value_enum)]
        style: Option<OutputStyle>,
    },

    /// Show or update saved settings
    Config {
        /// Default markup style
        #[arg(long, value_enum)]
        style: Option<OutputStyle>,

        /// Default log filter, used when RUST_LOG is unset
        #[arg(long)]
        log_filter: Option<String>,
    },
}
