//! HTTP adapter exposing the gate to a tracker front-end.
//!
//! A reverse proxy or tracker can forward announces here before serving
//! them and use the verdict. Responses are bencoded so a tracker client can
//! show the deny reason directly.
//!
//! # Endpoints
//!
//! - `/announce` and `/announce/{user_token}` - gate an announce
//! - `/scrape` - always allowed
//! - `/stats` - gate counters as JSON
//!
//! # Response Format
//!
//! - allow: `d6:status5:allowe`
//! - deny: `d14:failure reason<len>:<reason>e`

/// Data structures for the HTTP service.
pub mod structs;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;

/// Unit tests for request handling.
pub mod tests;
