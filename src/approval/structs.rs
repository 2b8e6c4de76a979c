//! Snapshot and cache structs.

/// Immutable allow-list snapshot.
pub mod allow_list_snapshot;

/// Concurrency-safe holder of the current snapshot.
pub mod approval_cache;
