//! scl90-audit
//!
//! Application-level audit events for the access-token lifecycle, emitted
//! through `tracing`.

pub mod events;
