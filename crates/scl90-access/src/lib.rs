//! scl90-access
//!
//! Single-use access tokens. A token is derived from an order id, carries no
//! state of its own, and is tracked as consumed in the local store once a
//! result has been produced for it.
//!
//! The manager is stateless: every operation takes the store it works on.

pub mod error;
pub mod gate;
pub mod token;
pub mod usage;
