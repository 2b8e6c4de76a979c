use std::collections::HashMap;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

impl AnnounceRequest {
    /// Builds a request from a parsed announce query.
    ///
    /// `info_hash` and `peer_id` must be exactly 20 raw bytes. The byte
    /// counters are optional and default to 0, the gate does not use them
    /// for its verdict.
    pub fn from_query(path: &str, raw_query: Option<String>, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceRequest, CustomError>
    {
        fn get_required_bytes<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<&'a [u8], CustomError> {
            query.get(field)
                .ok_or_else(|| CustomError::new(&format!("missing {field}")))?
                .first()
                .map(|value| value.as_slice())
                .ok_or_else(|| CustomError::new(&format!("no {field} given")))
        }

        fn parse_counter(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<u64, CustomError> {
            let Some(bytes) = query.get(field).and_then(|values| values.first()) else {
                return Ok(0);
            };
            std::str::from_utf8(bytes)
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .ok_or_else(|| CustomError::new(&format!("invalid {field}")))
        }

        let info_hash = InfoHash::try_from(get_required_bytes(query, "info_hash")?)
            .map_err(|_| CustomError::new("invalid info_hash size"))?;
        let peer_id = PeerId::try_from(get_required_bytes(query, "peer_id")?)
            .map_err(|_| CustomError::new("invalid peer_id size"))?;

        let event = query.get("event")
            .and_then(|values| values.first())
            .map(|bytes| AnnounceEvent::from_query_value(&String::from_utf8_lossy(bytes)))
            .unwrap_or_default();

        Ok(AnnounceRequest {
            info_hash,
            peer_id,
            path: path.to_string(),
            query: raw_query,
            uploaded: parse_counter(query, "uploaded")?,
            downloaded: parse_counter(query, "downloaded")?,
            left: parse_counter(query, "left")?,
            event,
        })
    }
}
