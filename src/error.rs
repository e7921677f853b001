use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl CatalogError {
    /// Build a script error for a 1-based line number
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        CatalogError::Script {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
