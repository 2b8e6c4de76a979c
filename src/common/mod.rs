//! Common utilities and shared functionality.
//!
//! - Query string parsing
//! - Hex formatting for the 20-byte identifiers
//! - Logging setup
//! - `CustomError`, the plain message error used at the binary boundary

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
