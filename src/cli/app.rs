use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::table::OutputFormat;
use crate::config::LogLevel;

/// book-catalog: in-memory book catalog editor
#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(version = "0.1.0")]
#[command(about = "In-memory book catalog editor")]
#[command(
    long_about = "Add, edit and delete book records in a transient catalog, either interactively or by replaying a script of form interactions."
)]
pub struct Cli {
    /// Configuration file (defaults to catalog.yaml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity, overrides the configuration file
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Allow adding and saving records with empty fields
    #[arg(long, global = true)]
    pub allow_empty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a script of form interactions and print the resulting table
    Run {
        /// Script file; reads stdin when omitted or '-'
        script: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive terminal editor
    #[cfg(feature = "tui")]
    Tui {
        /// Write logs to this file instead of discarding them
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Run { .. } => "run",
            #[cfg(feature = "tui")]
            Commands::Tui { .. } => "tui",
        }
    }
}
