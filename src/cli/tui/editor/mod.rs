/// Interactive catalog editor implementation
pub mod app;
pub mod events;
pub mod state;
pub mod theme;
pub mod view;

use crate::catalog::SubmitGuard;
use crate::Result;

/// Entry point for the editor
pub async fn run(guard: SubmitGuard) -> Result<()> {
    let app = app::App::new(guard);
    app.run().await
}
