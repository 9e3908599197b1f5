use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cycler experiment protocol CLI
#[derive(Parser)]
#[command(name = "cycler")]
#[command(version, about = "Experiment protocol tooling", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a protocol file into step dictionaries, one JSON object per instruction
    Parse {
        /// Path to the protocol file, or `-` to read standard input
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Sampling period applied to every step, e.g. `1 minute`
        #[arg(long)]
        period: Option<String>,

        /// Ambient temperature applied to every step, e.g. `25oC`
        #[arg(long)]
        temperature: Option<String>,

        /// Tag applied to every step (may be repeated)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Development tools for checking single conversions
    Dev {
        #[command(subcommand)]
        command: DevCommands,
    },
}

#[derive(Subcommand)]
pub enum DevCommands {
    /// Convert a time quantity to seconds
    ConvertTime {
        /// Quantity to convert, e.g. `0.5 hours`
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Convert a temperature to kelvin
    ConvertTemperature {
        /// Temperature to convert, e.g. `25oC`
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Classify an electrical quantity and convert it to base units
    ConvertElectric {
        /// Quantity to convert, e.g. `200mA` or `C/20`
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Parse a timestamp in any supported format
    ParseTimestamp {
        /// Timestamp to parse, e.g. `Day 5 12:30:00`
        #[arg(value_name = "TEXT")]
        text: String,
    },
}
