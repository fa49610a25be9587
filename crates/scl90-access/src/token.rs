use scl90_core::models::token::AccessToken;
use tracing::debug;

use crate::error::AccessError;

/// Salt mixed into every derivation unless a deployment overrides it.
pub const DEFAULT_SECRET: &str = "SCL90-SECRET-2025";

/// Shortest order id accepted after whitespace removal.
pub const MIN_ORDER_ID_LEN: usize = 5;

/// Strip all whitespace (leading, trailing and internal) from an order id.
pub fn normalize_order_id(order_id: &str) -> Result<String, AccessError> {
    let normalized: String = order_id.split_whitespace().collect();
    if normalized.is_empty() {
        return Err(AccessError::InvalidOrderId("order id is empty".to_string()));
    }
    if normalized.chars().count() < MIN_ORDER_ID_LEN {
        return Err(AccessError::InvalidOrderId(format!(
            "order id must be at least {MIN_ORDER_ID_LEN} characters"
        )));
    }
    Ok(normalized)
}

/// Derive the access token for an order id with the default secret.
pub fn derive(order_id: &str) -> Result<AccessToken, AccessError> {
    derive_with_secret(order_id, DEFAULT_SECRET)
}

/// Hash `"{order_id}-{secret}"` and keep the first 128 bits as lowercase hex.
///
/// Deterministic: the same normalized order id always yields the same token.
/// This deters casual reuse; it is not a security boundary. Tokens from the
/// earlier MD5-based client are a different value for the same order and are
/// not recognized here.
pub fn derive_with_secret(order_id: &str, secret: &str) -> Result<AccessToken, AccessError> {
    let normalized = normalize_order_id(order_id)?;
    let input = format!("{normalized}-{secret}");
    let hex = blake3::hash(input.as_bytes()).to_hex();

    let token = AccessToken::parse(&hex.as_str()[..AccessToken::LEN])
        .map_err(|e| AccessError::MalformedToken(e.to_string()))?;
    debug!(token = token.hint(), "derived access token");
    Ok(token)
}

/// True iff `candidate` is exactly 32 characters of `[0-9a-f]`.
pub fn is_well_formed(candidate: &str) -> bool {
    AccessToken::is_well_formed(candidate)
}

pub fn parse_token(candidate: &str) -> Result<AccessToken, AccessError> {
    AccessToken::parse(candidate).map_err(|_| AccessError::MalformedToken(candidate.to_string()))
}

/// Check that `token` belongs to `order_id` by re-deriving it.
pub fn verify(order_id: &str, token: &str) -> bool {
    verify_with_secret(order_id, token, DEFAULT_SECRET)
}

pub fn verify_with_secret(order_id: &str, token: &str, secret: &str) -> bool {
    derive_with_secret(order_id, secret).is_ok_and(|derived| derived.as_str() == token)
}
