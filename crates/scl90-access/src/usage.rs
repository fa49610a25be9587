//! Consumption tracking in the local store.
//!
//! Store failures never escape from here. A corrupt or unreadable used-token
//! list reads as "nothing consumed" so a damaged store cannot lock a user
//! out; write failures are logged and reported back as [`MarkOutcome`].

use scl90_core::models::token::AccessToken;
use scl90_core::store_keys;
use scl90_storage::state::{load_state, save_state};
use scl90_storage::store::KeyValueStore;
use tracing::{info, warn};

fn used_tokens<S: KeyValueStore + ?Sized>(store: &S) -> Vec<String> {
    match load_state::<Vec<String>, _>(store, store_keys::USED_TOKENS) {
        Ok(used) => used.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "used-token list unreadable, treating as empty");
            Vec::new()
        }
    }
}

pub fn is_consumed<S: KeyValueStore + ?Sized>(token: &AccessToken, store: &S) -> bool {
    used_tokens(store).iter().any(|used| used == token.as_str())
}

/// What [`mark_consumed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// This call added the token to the used set.
    Recorded,
    /// The token was already in the used set.
    AlreadyRecorded,
    /// The used set could not be written; the token is not consumed.
    WriteFailed,
}

impl MarkOutcome {
    /// True when the token is in the used set after the call.
    pub fn is_consumed(self) -> bool {
        !matches!(self, MarkOutcome::WriteFailed)
    }
}

/// Add `token` to the used set. An existing entry is left alone.
pub fn mark_consumed<S: KeyValueStore + ?Sized>(
    token: &AccessToken,
    store: &mut S,
) -> MarkOutcome {
    let mut used = used_tokens(&*store);
    if used.iter().any(|t| t == token.as_str()) {
        return MarkOutcome::AlreadyRecorded;
    }

    used.push(token.to_string());
    match save_state(store, store_keys::USED_TOKENS, &used) {
        Ok(()) => {
            info!(token = token.hint(), "access token consumed");
            MarkOutcome::Recorded
        }
        Err(e) => {
            warn!(error = %e, token = token.hint(), "failed to record consumed token");
            MarkOutcome::WriteFailed
        }
    }
}

/// The token the active session is redeeming, if any.
pub fn get_current<S: KeyValueStore + ?Sized>(store: &S) -> Option<AccessToken> {
    let raw = match store.get(store_keys::CURRENT_TOKEN) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, "current token unreadable");
            return None;
        }
    };
    match AccessToken::parse(&raw) {
        Ok(token) => Some(token),
        Err(_) => {
            warn!("current token slot holds a malformed value, ignoring it");
            None
        }
    }
}

pub fn set_current<S: KeyValueStore + ?Sized>(token: &AccessToken, store: &mut S) {
    if let Err(e) = store.set(store_keys::CURRENT_TOKEN, token.as_str()) {
        warn!(error = %e, token = token.hint(), "failed to set current token");
    }
}

pub fn clear_current<S: KeyValueStore + ?Sized>(store: &mut S) {
    if let Err(e) = store.remove(store_keys::CURRENT_TOKEN) {
        warn!(error = %e, "failed to clear current token");
    }
}
