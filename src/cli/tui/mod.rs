/// Terminal User Interface module for interactive commands
pub mod editor;

use crate::catalog::SubmitGuard;
use crate::Result;

/// Run the interactive catalog editor
pub async fn run_catalog_editor(guard: SubmitGuard) -> Result<()> {
    editor::run(guard).await
}
