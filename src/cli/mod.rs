pub mod app;
pub mod commands;
pub mod script;
pub mod table;
#[cfg(feature = "tui")]
pub mod tui;

pub use app::{Cli, Commands};
