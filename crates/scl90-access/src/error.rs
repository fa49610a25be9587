use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("invalid order id: {0}")]
    InvalidOrderId(String),

    #[error("malformed access token: {0}")]
    MalformedToken(String),

    #[error("access token {hint}... has already been used")]
    AlreadyConsumed { hint: String },

    #[error("could not record access token {hint}... as used; it stays in use")]
    ConsumptionNotRecorded { hint: String },
}
