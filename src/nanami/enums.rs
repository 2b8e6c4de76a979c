//! Authority enumerations.

/// Errors raised by a call to nanami.
pub mod authority_error;
