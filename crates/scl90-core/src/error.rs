use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("response {0} is outside the 1-5 scale")]
    InvalidResponse(u8),

    #[error("invalid access token: {0}")]
    InvalidToken(String),
}
