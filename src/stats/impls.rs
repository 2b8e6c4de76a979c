//! Implementation blocks for statistics.

/// StatsAtomics: update, set and snapshot.
pub mod stats_atomics;
