//! scl90-session
//!
//! One assessment session: admission through an access token, answers
//! persisted after every response, and finalization that scores the
//! complete answer set and consumes the token.

pub mod error;
pub mod session;
