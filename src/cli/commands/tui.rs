use super::CommandHandler;
use crate::catalog::SubmitGuard;
use crate::{CatalogError, Result};

/// Handler for the `tui` command
pub struct TuiCommand {
    pub guard: SubmitGuard,
}

impl CommandHandler for TuiCommand {
    fn execute(&self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CatalogError::Terminal(format!("Failed to start runtime: {}", e)))?;

        runtime.block_on(crate::cli::tui::run_catalog_editor(self.guard))
    }

    fn name(&self) -> &'static str {
        "tui"
    }
}

impl TuiCommand {
    /// Create new tui command
    pub fn new(guard: SubmitGuard) -> Self {
        Self { guard }
    }
}
