//! Batcher enumerations.

/// Reasons an event was not queued.
pub mod enqueue_error;
