use crate::tracker::structs::info_hash::InfoHash;

#[derive(Clone, Debug, Default)]
pub struct ScrapeRequest {
    pub info_hashes: Vec<InfoHash>,
    pub path: String,
}
