pub mod loader;
pub mod types;

pub use loader::{default_config_path, ConfigLoader, CONFIG_FILE_NAME};
pub use types::{CatalogConfig, LogLevel, TableStyle};
