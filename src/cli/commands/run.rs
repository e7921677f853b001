use super::CommandHandler;
use crate::catalog::{Session, SubmitGuard};
use crate::cli::script::{parse_script, ScriptCommand, ScriptLine};
use crate::cli::table::{render, OutputFormat};
use crate::config::TableStyle;
use crate::{CatalogError, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handler for the `run` command
pub struct RunCommand {
    pub script: Option<PathBuf>,
    pub format: OutputFormat,
    pub guard: SubmitGuard,
    pub table_style: TableStyle,
}

impl CommandHandler for RunCommand {
    fn execute(&self) -> Result<()> {
        let source = self.read_source()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_source(&source, &mut out)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "run"
    }
}

impl RunCommand {
    /// Create new run command
    pub fn new(
        script: Option<PathBuf>,
        format: OutputFormat,
        guard: SubmitGuard,
        table_style: TableStyle,
    ) -> Self {
        Self {
            script,
            format,
            guard,
            table_style,
        }
    }

    fn read_source(&self) -> Result<String> {
        match self.script.as_deref() {
            Some(path) if path != Path::new("-") => {
                std::fs::read_to_string(path).map_err(|e| {
                    CatalogError::Config(format!(
                        "Failed to read script {}: {}",
                        path.display(),
                        e
                    ))
                })
            }
            _ => Ok(io::read_to_string(io::stdin())?),
        }
    }

    /// Parse and replay `source`, writing `show` output and the final table
    ///
    /// The whole script is parsed before anything runs, so a syntax error
    /// produces no partial output.
    pub fn run_source<W: Write>(&self, source: &str, out: &mut W) -> Result<Session> {
        let lines = parse_script(source)?;
        let mut session = Session::new(self.guard);

        for line in &lines {
            self.apply(&mut session, line, out)?;
        }

        info!(
            commands = lines.len(),
            records = session.store().len(),
            "script finished"
        );
        writeln!(out, "{}", self.render(&session)?)?;
        Ok(session)
    }

    fn apply<W: Write>(&self, session: &mut Session, line: &ScriptLine, out: &mut W) -> Result<()> {
        debug!(line = line.line, command = line.command.name(), "applying");
        match &line.command {
            ScriptCommand::Type { field, value } => session.input_new(*field, value.as_str()),
            ScriptCommand::Change { field, value } => session.input_edit(*field, value.as_str()),
            ScriptCommand::Add => {
                session.add();
            }
            ScriptCommand::Edit { index } => {
                session.edit(*index);
            }
            ScriptCommand::Save => {
                session.save();
            }
            ScriptCommand::Cancel => session.cancel(),
            ScriptCommand::Delete { index } => {
                session.delete(*index);
            }
            ScriptCommand::Show => {
                writeln!(out, "{}", self.render(session)?)?;
            }
        }
        Ok(())
    }

    fn render(&self, session: &Session) -> Result<String> {
        render(session.store().records(), self.format, self.table_style)
    }
}
