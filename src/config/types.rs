use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::SubmitGuard;

/// Settings read from catalog.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Whether empty fields disable add/update
    #[serde(default)]
    pub submit_guard: SubmitGuard,

    /// Default log verbosity
    #[serde(default)]
    pub log_level: LogLevel,

    /// Border style for text tables printed by `run`
    #[serde(default)]
    pub table_style: TableStyle,
}

impl CatalogConfig {
    /// Apply command-line overrides on top of file settings
    pub fn with_overrides(mut self, log_level: Option<LogLevel>, allow_empty: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if allow_empty {
            self.submit_guard = SubmitGuard::Off;
        }
        self
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Table border styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Rounded,
    Ascii,
    Markdown,
}
