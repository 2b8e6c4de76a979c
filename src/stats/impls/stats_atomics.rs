use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::current_timestamp;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(current_timestamp(), Ordering::SeqCst);
        stats
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_refresh: self.timestamp_run_refresh.load(Ordering::SeqCst),
            refresh_success: self.refresh_success.load(Ordering::SeqCst),
            refresh_failure: self.refresh_failure.load(Ordering::SeqCst),
            torrents_skipped: self.torrents_skipped.load(Ordering::SeqCst),
            approved_torrents: self.approved_torrents.load(Ordering::SeqCst),
            approved_clients: self.approved_clients.load(Ordering::SeqCst),
            approved_users: self.approved_users.load(Ordering::SeqCst),
            announces_allowed: self.announces_allowed.load(Ordering::SeqCst),
            denied_user: self.denied_user.load(Ordering::SeqCst),
            denied_torrent: self.denied_torrent.load(Ordering::SeqCst),
            denied_client: self.denied_client.load(Ordering::SeqCst),
            scrapes_allowed: self.scrapes_allowed.load(Ordering::SeqCst),
            events_queued: self.events_queued.load(Ordering::SeqCst),
            events_dropped: self.events_dropped.load(Ordering::SeqCst),
            events_pushed: self.events_pushed.load(Ordering::SeqCst),
            batches_pushed: self.batches_pushed.load(Ordering::SeqCst),
            batches_failed: self.batches_failed.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::RefreshSuccess => &self.refresh_success,
            StatsEvent::RefreshFailure => &self.refresh_failure,
            StatsEvent::TorrentsSkipped => &self.torrents_skipped,
            StatsEvent::ApprovedTorrents => &self.approved_torrents,
            StatsEvent::ApprovedClients => &self.approved_clients,
            StatsEvent::ApprovedUsers => &self.approved_users,
            StatsEvent::AnnouncesAllowed => &self.announces_allowed,
            StatsEvent::DeniedUser => &self.denied_user,
            StatsEvent::DeniedTorrent => &self.denied_torrent,
            StatsEvent::DeniedClient => &self.denied_client,
            StatsEvent::ScrapesAllowed => &self.scrapes_allowed,
            StatsEvent::EventsQueued => &self.events_queued,
            StatsEvent::EventsDropped => &self.events_dropped,
            StatsEvent::EventsPushed => &self.events_pushed,
            StatsEvent::BatchesPushed => &self.batches_pushed,
            StatsEvent::BatchesFailed => &self.batches_failed,
            StatsEvent::TimestampRefresh => &self.timestamp_run_refresh,
        }
    }
}
