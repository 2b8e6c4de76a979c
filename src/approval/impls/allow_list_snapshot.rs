use std::collections::HashSet;
use crate::approval::structs::allow_list_snapshot::AllowListSnapshot;
use crate::tracker::structs::client_id::ClientId;
use crate::tracker::structs::info_hash::InfoHash;

impl AllowListSnapshot {
    pub fn new(torrents: HashSet<InfoHash>, clients: HashSet<ClientId>, users: HashSet<String>) -> AllowListSnapshot {
        AllowListSnapshot { torrents, clients, users }
    }

    pub fn empty() -> AllowListSnapshot {
        AllowListSnapshot::default()
    }

    pub fn is_torrent_approved(&self, info_hash: &InfoHash) -> bool {
        self.torrents.contains(info_hash)
    }

    pub fn is_client_approved(&self, client_id: &ClientId) -> bool {
        self.clients.contains(client_id)
    }

    /// The empty token never matches, even if nanami lists it.
    pub fn is_user_approved(&self, user_token: &str) -> bool {
        !user_token.is_empty() && self.users.contains(user_token)
    }

    pub fn torrents(&self) -> &HashSet<InfoHash> {
        &self.torrents
    }

    pub fn clients(&self) -> &HashSet<ClientId> {
        &self.clients
    }

    pub fn users(&self) -> &HashSet<String> {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.torrents.is_empty() && self.clients.is_empty() && self.users.is_empty()
    }
}
