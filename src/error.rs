use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Failed to write catalog store {}: {source}", .path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No book IDs left to assign")]
    IdsExhausted,

    #[error("Book with ID {0} not found")]
    NotFound(u64),

    #[error("Invalid status '{0}'. Use 'Available' or 'CheckedOut'")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

impl CatalogError {
    /// Expected outcomes of a catalog operation, as opposed to failures
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound(_) | CatalogError::InvalidStatus(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
