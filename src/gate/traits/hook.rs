use crate::gate::enums::gate_error::GateError;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::scrape_request::ScrapeRequest;

/// Per-request middleware hook. An `Err` is the deny verdict; the host turns
/// it into a tracker failure response.
pub trait Hook: Send + Sync {
    fn handle_announce(&self, request: &AnnounceRequest) -> Result<(), GateError>;

    fn handle_scrape(&self, request: &ScrapeRequest) -> Result<(), GateError>;
}
