use serde::{Deserialize, Serialize};

/// Point-in-time copy of the gate counters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_refresh: i64,
    pub refresh_success: i64,
    pub refresh_failure: i64,
    pub torrents_skipped: i64,
    pub approved_torrents: i64,
    pub approved_clients: i64,
    pub approved_users: i64,
    pub announces_allowed: i64,
    pub denied_user: i64,
    pub denied_torrent: i64,
    pub denied_client: i64,
    pub scrapes_allowed: i64,
    pub events_queued: i64,
    pub events_dropped: i64,
    pub events_pushed: i64,
    pub batches_pushed: i64,
    pub batches_failed: i64,
}
