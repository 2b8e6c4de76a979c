//! Gate traits.

/// Interface the host tracker invokes per request.
pub mod hook;

/// Strategy for reading the user token out of a request.
pub mod user_token_extractor;
