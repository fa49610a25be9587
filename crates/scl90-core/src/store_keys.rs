//! Logical key conventions for the local key-value store.
//!
//! The first three names follow the keys of the earlier browser client. Its
//! tokens were derived with a different hash, so a used-token list carried
//! over from it does not match tokens issued here.

/// JSON list of access tokens that already produced a result.
pub const USED_TOKENS: &str = "used_access_keys";

/// The token the active session is redeeming. Absent when no session is live.
pub const CURRENT_TOKEN: &str = "current_access_key";

/// In-progress answers, a JSON object keyed by item id.
pub const ANSWERS: &str = "scl90_answers";

/// The token the in-progress answers were recorded under. Absent for answers
/// recorded before any token was admitted.
pub const ANSWERS_OWNER: &str = "scl90_answers_owner";

/// The answer set of the last finished session, kept for showing its report
/// again.
pub const LAST_ANSWERS: &str = "scl90_last_answers";
