use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use log::{debug, info, warn};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use crate::batcher::enums::enqueue_error::EnqueueError;
use crate::batcher::structs::announce_batcher::AnnounceBatcher;
use crate::config::structs::nanami_config::NanamiConfig;
use crate::nanami::structs::announce_batch::AnnounceBatch;
use crate::nanami::structs::authority_client::AuthorityClient;
use crate::nanami::structs::single_user_announce::SingleUserAnnounce;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl AnnounceBatcher {
    /// Creates the queue and spawns its consumer.
    pub fn start(
        client: Arc<AuthorityClient>,
        batch_size: usize,
        flush_interval: Duration,
        queue_capacity: usize,
        stats: Arc<StatsAtomics>,
        shutdown: CancellationToken,
    ) -> Arc<AnnounceBatcher> {
        let batch_size = batch_size.max(1);
        let flush_interval = flush_interval.max(Duration::from_secs(NanamiConfig::MIN_BATCH_FLUSH_INTERVAL));
        let (sender, receiver) = mpsc::channel::<SingleUserAnnounce>(queue_capacity.max(1));
        let batcher = Arc::new(AnnounceBatcher {
            sender,
            closed: AtomicBool::new(false),
            stats: stats.clone(),
            shutdown: shutdown.clone(),
            consumer_task: Mutex::new(None),
        });
        info!("[BOOT] Starting announce batcher (batch {batch_size}, flush {}s, queue {queue_capacity})...", flush_interval.as_secs());
        let handle = tokio::spawn(Self::consume(receiver, client, batch_size, flush_interval, stats, shutdown));
        *batcher.consumer_task.lock() = Some(handle);
        batcher
    }

    /// Queues one announce without waiting.
    ///
    /// A full queue drops the event; telemetry loss is preferred over
    /// stalling the request path.
    pub fn enqueue(&self, announce: SingleUserAnnounce) -> Result<(), EnqueueError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(EnqueueError::Closed);
        }
        match self.sender.try_send(announce) {
            Ok(()) => {
                self.stats.update_stats(StatsEvent::EventsQueued, 1);
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                self.stats.update_stats(StatsEvent::EventsDropped, 1);
                debug!("[BATCHER] Queue full, announce dropped");
                Err(EnqueueError::QueueFull)
            }
            Err(TrySendError::Closed(_)) => {
                self.stats.update_stats(StatsEvent::EventsDropped, 1);
                Err(EnqueueError::Closed)
            }
        }
    }

    pub fn queue_len(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }

    async fn consume(
        mut receiver: mpsc::Receiver<SingleUserAnnounce>,
        client: Arc<AuthorityClient>,
        batch_size: usize,
        flush_interval: Duration,
        stats: Arc<StatsAtomics>,
        shutdown: CancellationToken,
    ) {
        let mut batch = AnnounceBatch::with_capacity(batch_size);
        let mut flush_deadline: Option<Instant> = None;

        loop {
            let deadline = flush_deadline.unwrap_or_else(|| Instant::now() + flush_interval);
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    break;
                }
                received = receiver.recv() => {
                    let Some(announce) = received else {
                        break;
                    };
                    if batch.is_empty() {
                        flush_deadline = Some(Instant::now() + flush_interval);
                    }
                    batch.push(announce);
                    if batch.len() >= batch_size {
                        Self::flush(&client, &stats, batch.take()).await;
                        flush_deadline = None;
                    }
                }
                _ = sleep_until(deadline), if flush_deadline.is_some() => {
                    Self::flush(&client, &stats, batch.take()).await;
                    flush_deadline = None;
                }
            }
        }

        info!("[BOOT] Shutting down announce batcher, draining queue...");
        receiver.close();
        while let Some(announce) = receiver.recv().await {
            batch.push(announce);
            if batch.len() >= batch_size {
                Self::flush(&client, &stats, batch.take()).await;
            }
        }
        if !batch.is_empty() {
            Self::flush(&client, &stats, batch.take()).await;
        }
        info!("[BOOT] Announce batcher stopped");
    }

    async fn flush(client: &AuthorityClient, stats: &StatsAtomics, batch: AnnounceBatch) {
        let size = batch.len() as i64;
        match client.push_batch(&batch).await {
            Ok(()) => {
                stats.update_stats(StatsEvent::BatchesPushed, 1);
                stats.update_stats(StatsEvent::EventsPushed, size);
                debug!("[BATCHER] Pushed batch of {size} announces");
            }
            Err(error) => {
                stats.update_stats(StatsEvent::BatchesFailed, 1);
                warn!("[BATCHER] Did not push batch of {size} announces because of error: {error}");
            }
        }
    }

    /// Stops accepting events, drains the queue into a final push and waits
    /// for the consumer to exit.
    pub async fn shutdown(&self) {
        self.closed.store(true, Ordering::Release);
        self.shutdown.cancel();
        let handle = self.consumer_task.lock().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}
