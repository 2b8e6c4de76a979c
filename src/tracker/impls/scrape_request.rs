use std::collections::HashMap;
use log::debug;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::scrape_request::ScrapeRequest;

impl ScrapeRequest {
    /// Collects every well-formed `info_hash` value. Scrapes are never
    /// denied, so malformed entries are skipped instead of failing the request.
    pub fn from_query(path: &str, query: &HashMap<String, Vec<Vec<u8>>>) -> ScrapeRequest
    {
        let info_hashes: Vec<InfoHash> = query.get("info_hash")
            .map(|values| values.iter()
                .filter_map(|value| match InfoHash::try_from(value.as_slice()) {
                    Ok(info_hash) => Some(info_hash),
                    Err(_) => {
                        debug!("[HTTP] Skipping scrape info_hash of {} bytes", value.len());
                        None
                    }
                })
                .collect())
            .unwrap_or_default();

        ScrapeRequest {
            info_hashes,
            path: path.to_string(),
        }
    }
}
