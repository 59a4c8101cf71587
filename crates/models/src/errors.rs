use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("invalid request body: expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
