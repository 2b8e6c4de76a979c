use std::sync::atomic::AtomicI64;

/// Live counters shared by the cache, the batcher and the gate.
#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_refresh: AtomicI64,
    pub refresh_success: AtomicI64,
    pub refresh_failure: AtomicI64,
    pub torrents_skipped: AtomicI64,
    pub approved_torrents: AtomicI64,
    pub approved_clients: AtomicI64,
    pub approved_users: AtomicI64,
    pub announces_allowed: AtomicI64,
    pub denied_user: AtomicI64,
    pub denied_torrent: AtomicI64,
    pub denied_client: AtomicI64,
    pub scrapes_allowed: AtomicI64,
    pub events_queued: AtomicI64,
    pub events_dropped: AtomicI64,
    pub events_pushed: AtomicI64,
    pub batches_pushed: AtomicI64,
    pub batches_failed: AtomicI64,
}
