//! Announce telemetry batching.
//!
//! Request handlers hand accepted announces to `AnnounceBatcher::enqueue`,
//! which never waits: the bounded queue either takes the event or the event
//! is dropped and counted. A single consumer task closes a batch when it
//! reaches `batch_size` or when `batch_flush_interval` has passed since its
//! first event, then pushes it to nanami. A batch whose push fails is
//! discarded, never re-queued.
//!
//! On shutdown the queue is closed, whatever is left in it is drained into
//! final batches and pushed once, and the consumer exits.

/// Enqueue error enumeration.
pub mod enums;

/// Implementation blocks for the batcher.
pub mod impls;

/// Batcher struct.
pub mod structs;
