//! scl90-cli
//!
//! The `scl90` command-line front end: config file handling, the command
//! implementations over a file-backed store, and plain-text report
//! rendering.

pub mod commands;
pub mod config;
pub mod render;
