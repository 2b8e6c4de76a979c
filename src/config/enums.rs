//! Configuration enumerations.

/// Errors raised while loading or validating configuration.
pub mod configuration_error;

/// User token extraction source.
pub mod user_token_source;
