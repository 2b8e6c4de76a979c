use std::collections::HashSet;
use std::sync::Arc;
use log::{debug, warn};
use crate::approval::structs::allow_list_snapshot::AllowListSnapshot;
use crate::nanami::enums::authority_error::AuthorityError;
use crate::nanami::structs::announce_batch::AnnounceBatch;
use crate::nanami::structs::authority_client::AuthorityClient;
use crate::nanami::traits::authority_backend::AuthorityBackend;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::client_id::ClientId;
use crate::tracker::structs::info_hash::InfoHash;

impl AuthorityClient {
    pub fn new(backend: Arc<dyn AuthorityBackend>, stats: Arc<StatsAtomics>) -> AuthorityClient {
        AuthorityClient { backend, stats }
    }

    /// Fetches the current allow-lists and turns them into a snapshot.
    ///
    /// Torrent entries that are not exactly 20 bytes are logged and skipped;
    /// the rest of the payload still applies.
    pub async fn fetch_approvals(&self) -> Result<AllowListSnapshot, AuthorityError> {
        let info = self.backend.fetch_approval_info().await?;

        let mut torrents = HashSet::with_capacity(info.approved_torrents.len());
        let mut skipped = 0i64;
        for entry in &info.approved_torrents {
            match InfoHash::try_from(entry.as_bytes()) {
                Ok(info_hash) => { torrents.insert(info_hash); }
                Err(_) => {
                    skipped += 1;
                    warn!("[NANAMI] Invalid format for approved torrent: {:?} ({} bytes)", entry, entry.len());
                }
            }
        }
        if skipped > 0 {
            self.stats.update_stats(StatsEvent::TorrentsSkipped, skipped);
        }

        let clients: HashSet<ClientId> = info.approved_clients.iter()
            .map(|entry| ClientId::from(entry.as_str()))
            .collect();
        let users: HashSet<String> = info.approved_users.into_iter().collect();

        debug!("[NANAMI] Approval info: {} torrents ({} skipped), {} clients, {} users",
            torrents.len(), skipped, clients.len(), users.len());
        Ok(AllowListSnapshot::new(torrents, clients, users))
    }

    /// Pushes one batch. Failures are returned as-is; nothing is retried here.
    pub async fn push_batch(&self, batch: &AnnounceBatch) -> Result<(), AuthorityError> {
        self.backend.push_announce_batch(batch).await
    }
}
