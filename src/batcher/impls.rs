//! Implementation blocks for the batcher.

/// AnnounceBatcher: enqueue, consumer loop, shutdown.
pub mod announce_batcher;
