//! Short client software tag.

/// A 6-byte client tag, e.g. `qB4650` for `-qB4650-...` peer ids.
///
/// Approved clients come from the authority as strings and are copied into
/// this fixed-length form, zero padded when shorter and truncated when longer.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct ClientId(pub [u8; 6]);
