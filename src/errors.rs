use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotedropError {
    #[error("Vault error: {0}")]
    Vault(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NotedropResult<T> = Result<T, NotedropError>;
