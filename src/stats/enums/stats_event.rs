//! Statistics event types for tracking gate activity.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `StatsAtomics::update_stats()` to move a counter by a
/// signed amount.
///
/// # Categories
///
/// - **Refresh**: RefreshSuccess, RefreshFailure, TorrentsSkipped
/// - **Snapshot size**: ApprovedTorrents, ApprovedClients, ApprovedUsers (set, not added)
/// - **Verdicts**: AnnouncesAllowed, Denied*, ScrapesAllowed
/// - **Telemetry**: EventsQueued, EventsDropped, EventsPushed, BatchesPushed, BatchesFailed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    RefreshSuccess,
    RefreshFailure,
    TorrentsSkipped,
    ApprovedTorrents,
    ApprovedClients,
    ApprovedUsers,
    AnnouncesAllowed,
    DeniedUser,
    DeniedTorrent,
    DeniedClient,
    ScrapesAllowed,
    EventsQueued,
    EventsDropped,
    EventsPushed,
    BatchesPushed,
    BatchesFailed,
    TimestampRefresh,
}
