//! Gate enumerations.

/// Per-request deny reasons.
pub mod gate_error;
