//! Implementation blocks for common types.

/// CustomError: constructor, Display, Error.
pub mod custom_error;
