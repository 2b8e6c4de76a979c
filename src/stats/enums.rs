//! Statistics enumerations.

/// Counter selector for `update_stats`.
pub mod stats_event;
