use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Component not registered: {0}")]
    ComponentNotRegistered(String),

    #[error("Block index {index} out of range (model has {len} blocks)")]
    BlockOutOfRange { index: usize, len: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditorError {
    /// Key that failed lookup, if this is a registry miss.
    pub fn missing_component(&self) -> Option<&str> {
        match self {
            EditorError::ComponentNotRegistered(key) => Some(key),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
