use serde::{Deserialize, Serialize};
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SingleUserAnnounce {
    pub user_token: String,
    pub infohash: InfoHash,
    pub event: u8,
    pub downloaded: u64,
    pub uploaded: u64,
}
