//! Enumerations for tracker requests.

/// Announce event types (`none`, `started`, `stopped`, `completed`).
pub mod announce_event;

/// Peer id to client tag derivation conventions.
pub mod client_id_scheme;
