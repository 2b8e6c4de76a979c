//! BitTorrent primitives the gate reasons about.
//!
//! The gate never touches peer storage or swarm state. All it needs from a
//! tracker request are the identifiers that approvals are keyed by:
//!
//! - `InfoHash` - 20-byte torrent identifier
//! - `PeerId` - 20-byte peer identifier, source of the client tag
//! - `ClientId` - 6-byte client software tag
//! - `AnnounceEvent` - started/stopped/completed/update
//!
//! plus the request shapes the host hands over (`AnnounceRequest`,
//! `ScrapeRequest`).

/// Enumerations for announce events and client id conventions.
pub mod enums;

/// Implementation blocks for the identifier types.
pub mod impls;

/// Identifier and request structs.
pub mod structs;
