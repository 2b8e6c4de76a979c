use std::collections::HashSet;
use crate::tracker::structs::client_id::ClientId;
use crate::tracker::structs::info_hash::InfoHash;

/// The approved torrents, clients and users as of one successful fetch.
///
/// Fields are private to the crate and there are no mutators: a new fetch
/// produces a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowListSnapshot {
    pub(crate) torrents: HashSet<InfoHash>,
    pub(crate) clients: HashSet<ClientId>,
    pub(crate) users: HashSet<String>,
}
