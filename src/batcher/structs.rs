//! Batcher structs.

/// Bounded queue plus its consumer task.
pub mod announce_batcher;
