//! scl90-storage
//!
//! The local key-value store boundary. Callers see three operations
//! (`get`, `set`, `remove`) over string values; typed JSON access lives in
//! [`state`].

pub mod error;
pub mod file;
pub mod state;
pub mod store;
