use crate::nanami::structs::single_user_announce::SingleUserAnnounce;
use crate::tracker::structs::announce_request::AnnounceRequest;

impl SingleUserAnnounce {
    pub fn from_request(user_token: String, request: &AnnounceRequest) -> SingleUserAnnounce {
        SingleUserAnnounce {
            user_token,
            infohash: request.info_hash,
            event: request.event.as_u8(),
            downloaded: request.downloaded,
            uploaded: request.uploaded,
        }
    }
}
