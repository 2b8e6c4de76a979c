//! Identifier and request structs.

/// 20-byte torrent info hash.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// 6-byte client tag derived from a peer id.
pub mod client_id;

/// Announce request as seen by the gate.
pub mod announce_request;

/// Scrape request as seen by the gate.
pub mod scrape_request;
