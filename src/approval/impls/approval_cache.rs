use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use parking_lot::{Mutex, RwLock};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use crate::approval::structs::allow_list_snapshot::AllowListSnapshot;
use crate::approval::structs::approval_cache::ApprovalCache;
use crate::common::common::current_timestamp;
use crate::config::structs::nanami_config::NanamiConfig;
use crate::nanami::structs::authority_client::AuthorityClient;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl ApprovalCache {
    /// Creates a cache serving the empty snapshot. No loop is running yet.
    pub fn new(stats: Arc<StatsAtomics>, shutdown: CancellationToken) -> ApprovalCache {
        ApprovalCache {
            current: RwLock::new(Arc::new(AllowListSnapshot::empty())),
            stats,
            shutdown,
            refresh_task: Mutex::new(None),
        }
    }

    /// Creates the cache, performs the first fetch and spawns the refresh loop.
    ///
    /// The interval is raised to `NanamiConfig::MIN_REFRESH_INTERVAL` seconds.
    pub async fn start(
        client: Arc<AuthorityClient>,
        refresh_interval: Duration,
        stats: Arc<StatsAtomics>,
        shutdown: CancellationToken,
    ) -> Arc<ApprovalCache> {
        let refresh_interval = refresh_interval.max(Duration::from_secs(NanamiConfig::MIN_REFRESH_INTERVAL));
        let cache = Arc::new(ApprovalCache::new(stats, shutdown));
        if !cache.refresh(&client).await {
            warn!("[APPROVAL] nanami unreachable at startup, denying all announces until the next refresh");
        }
        let handle = tokio::spawn(Self::refresh_loop(cache.clone(), client, refresh_interval));
        *cache.refresh_task.lock() = Some(handle);
        cache
    }

    /// Returns the snapshot installed by the most recent completed `replace`.
    pub fn current(&self) -> Arc<AllowListSnapshot> {
        self.current.read().clone()
    }

    /// Installs a new snapshot. The old one is dropped after the lock is released.
    pub fn replace(&self, snapshot: AllowListSnapshot) {
        self.stats.set_stats(StatsEvent::ApprovedTorrents, snapshot.torrents.len() as i64);
        self.stats.set_stats(StatsEvent::ApprovedClients, snapshot.clients.len() as i64);
        self.stats.set_stats(StatsEvent::ApprovedUsers, snapshot.users.len() as i64);
        let snapshot = Arc::new(snapshot);
        let previous = {
            let mut current = self.current.write();
            std::mem::replace(&mut *current, snapshot)
        };
        drop(previous);
    }

    /// Runs one fetch. Returns whether a new snapshot was installed.
    pub async fn refresh(&self, client: &AuthorityClient) -> bool {
        self.stats.set_stats(StatsEvent::TimestampRefresh, current_timestamp());
        match client.fetch_approvals().await {
            Ok(snapshot) => {
                info!("[APPROVAL] Approvals updated: {} torrents, {} clients, {} users",
                    snapshot.torrents.len(), snapshot.clients.len(), snapshot.users.len());
                self.replace(snapshot);
                self.stats.update_stats(StatsEvent::RefreshSuccess, 1);
                true
            }
            Err(error) => {
                warn!("[APPROVAL] Did not update approvals because of error: {error}");
                self.stats.update_stats(StatsEvent::RefreshFailure, 1);
                false
            }
        }
    }

    async fn refresh_loop(cache: Arc<ApprovalCache>, client: Arc<AuthorityClient>, refresh_interval: Duration) {
        info!("[BOOT] Starting approval refresh loop with {} seconds delay...", refresh_interval.as_secs());
        let mut interval = interval_at(Instant::now() + refresh_interval, refresh_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = cache.shutdown.cancelled() => {
                    info!("[BOOT] Shutting down approval refresh loop...");
                    return;
                }
                _ = interval.tick() => {
                    cache.refresh(&client).await;
                }
            }
        }
    }

    /// Cancels the refresh loop and waits for it. An in-flight fetch finishes first.
    pub async fn shutdown(&self) {
        self.shutdown.cancel();
        let handle = self.refresh_task.lock().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}
