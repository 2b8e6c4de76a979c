//! Gate statistics.
//!
//! All counters are atomic integers so the request path, the refresh loop
//! and the batch consumer can update them without locking. The binary logs
//! them periodically and the HTTP adapter serves them as JSON on `/stats`.
//!
//! ```rust,ignore
//! use nanami_gate::stats::enums::stats_event::StatsEvent;
//!
//! gate.stats().update_stats(StatsEvent::EventsDropped, 1);
//! let stats = gate.stats().get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
