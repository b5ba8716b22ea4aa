use thiserror::Error;

pub type Result<T> = std::result::Result<T, TabFmError>;

#[derive(Debug, Error)]
pub enum TabFmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Backend(String),
}

impl From<String> for TabFmError {
    fn from(message: String) -> Self {
        TabFmError::Backend(message)
    }
}

impl From<&str> for TabFmError {
    fn from(message: &str) -> Self {
        TabFmError::Backend(message.to_string())
    }
}
