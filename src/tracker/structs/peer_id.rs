//! BitTorrent peer identifier.

/// A 20-byte peer id as self-reported by a BitTorrent client.
///
/// Only its leading bytes matter to the gate: they carry the client tag
/// that [`ClientId`](crate::tracker::structs::client_id::ClientId) is
/// derived from.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
