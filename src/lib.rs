pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;

pub use catalog::{BookRecord, CatalogStore, Draft, Field, Session, SubmitGuard};
pub use error::{CatalogError, Result};
