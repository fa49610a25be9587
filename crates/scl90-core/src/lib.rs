//! scl90-core
//!
//! Pure domain types shared by every SCL-90 crate: item ids, validated
//! responses, answer sets, access tokens and the logical store keys.
//! No scoring and no storage here.

pub mod error;
pub mod models;
pub mod store_keys;
