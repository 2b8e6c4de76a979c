use crate::tracker::structs::announce_request::AnnounceRequest;

/// Reads the user token from an announce. An empty string means "no token"
/// and is never approved.
pub trait UserTokenExtractor: Send + Sync {
    fn extract(&self, request: &AnnounceRequest) -> String;
}
