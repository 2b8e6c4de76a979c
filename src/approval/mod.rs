//! Allow-list cache and its refresh loop.
//!
//! # Architecture
//!
//! - `AllowListSnapshot` - immutable sets of approved torrents, clients and
//!   users, shared as `Arc`
//! - `ApprovalCache` - holds the current snapshot behind a
//!   `parking_lot::RwLock<Arc<_>>`; the write lock is only ever held for the
//!   pointer swap, so readers wait at most that long
//!
//! The refresh loop fetches once before it is spawned, then on every
//! `refresh_interval` tick. A failed fetch keeps the previous snapshot.
//! If the first fetch fails the cache serves the empty snapshot, which
//! denies every announce, until a later refresh succeeds.

/// Implementation blocks for the snapshot and the cache.
pub mod impls;

/// Snapshot and cache structs.
pub mod structs;
