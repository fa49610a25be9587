use scl90_core::models::token::AccessToken;
use scl90_storage::store::KeyValueStore;
use tracing::{info, warn};

use crate::error::AccessError;
use crate::token::parse_token;
use crate::usage::{clear_current, get_current, is_consumed, mark_consumed, set_current};

/// Where a token is in its lifecycle, as far as the store knows.
///
/// `Unknown` is not represented: any well-formed token is treated as issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    Issued,
    InUse,
    Consumed,
}

pub fn state_of<S: KeyValueStore + ?Sized>(token: &AccessToken, store: &S) -> TokenState {
    if is_consumed(token, store) {
        TokenState::Consumed
    } else if get_current(store).as_ref() == Some(token) {
        TokenState::InUse
    } else {
        TokenState::Issued
    }
}

/// Admit a session for `candidate`: it must be well formed and not yet
/// consumed. On success the token becomes the current one.
///
/// A rejection leaves the store untouched.
pub fn admit<S: KeyValueStore + ?Sized>(
    candidate: &str,
    store: &mut S,
) -> Result<AccessToken, AccessError> {
    let token = parse_token(candidate)?;
    if is_consumed(&token, &*store) {
        info!(token = token.hint(), "rejected consumed access token");
        return Err(AccessError::AlreadyConsumed {
            hint: token.hint().to_string(),
        });
    }

    set_current(&token, store);
    info!(token = token.hint(), "session admitted");
    Ok(token)
}

/// Consume the current token once its session has produced a result, and
/// clear the slot. Returns the token, or `None` when no session was live.
///
/// When the used set cannot be written the token stays current and
/// [`AccessError::ConsumptionNotRecorded`] is returned, so a retry can
/// still consume it.
pub fn complete<S: KeyValueStore + ?Sized>(
    store: &mut S,
) -> Result<Option<AccessToken>, AccessError> {
    let Some(token) = get_current(&*store) else {
        return Ok(None);
    };
    if !mark_consumed(&token, store).is_consumed() {
        warn!(token = token.hint(), "token left in use, consumption not recorded");
        return Err(AccessError::ConsumptionNotRecorded {
            hint: token.hint().to_string(),
        });
    }
    clear_current(store);
    Ok(Some(token))
}
