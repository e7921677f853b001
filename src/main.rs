use book_catalog::{
    cli::commands::{run::RunCommand, CommandHandler},
    cli::{Cli, Commands},
    config::{CatalogConfig, ConfigLoader, LogLevel},
    Result,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Where log output should go for this invocation
enum LogSink {
    Stderr,
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    File(std::path::PathBuf),
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    Off,
}

fn initialize_tracing(log_level: LogLevel, sink: LogSink) -> Result<()> {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    match sink {
        LogSink::Stderr => {
            // Stdout carries the rendered table
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogSink::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        LogSink::Off => {}
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let config = ConfigLoader::new().load(cli.config.as_deref())?;
    Ok(config.with_overrides(cli.log_level, cli.allow_empty))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let sink = match &cli.command {
        Commands::Run { .. } => LogSink::Stderr,
        #[cfg(feature = "tui")]
        Commands::Tui { log_file } => match log_file {
            Some(path) => LogSink::File(path.clone()),
            None => LogSink::Off,
        },
    };
    initialize_tracing(config.log_level, sink)?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Run { script, format } => {
            let command = RunCommand::new(script, format, config.submit_guard, config.table_style);
            tracing::debug!(command = command.name(), "executing");
            command.execute()?;
        }
        #[cfg(feature = "tui")]
        Commands::Tui { .. } => {
            let command =
                book_catalog::cli::commands::tui::TuiCommand::new(config.submit_guard);
            tracing::debug!(command = command.name(), "executing");
            command.execute()?;
        }
    }

    Ok(())
}
