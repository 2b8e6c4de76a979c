use serde::{Deserialize, Serialize};

/// Body of `GET approval`.
///
/// Torrent entries are raw 20-byte hashes carried as strings, clients are
/// short tags and users are opaque tokens. Missing lists decode as empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalInfo {
    #[serde(default)]
    pub approved_torrents: Vec<String>,
    #[serde(default)]
    pub approved_clients: Vec<String>,
    #[serde(default)]
    pub approved_users: Vec<String>,
}
