//! Implementation blocks for the tracker primitives.

/// InfoHash: Display, FromStr, TryFrom, Serialize, Deserialize.
pub mod info_hash;

/// PeerId: Display, TryFrom, client tag derivation.
pub mod peer_id;

/// ClientId: Display and conversion from authority strings.
pub mod client_id;

/// AnnounceEvent: query parsing and wire value.
pub mod announce_event;

/// AnnounceRequest: construction from a parsed query.
pub mod announce_request;

/// ScrapeRequest: construction from a parsed query.
pub mod scrape_request;
