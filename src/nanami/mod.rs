//! Communication with the nanami authority service.
//!
//! nanami is the source of truth for which torrents, clients and users may
//! use the tracker, and the sink for announce telemetry. Two calls exist:
//!
//! - `GET <nanami_address>approval` returns the three allow-lists
//! - `POST <nanami_address>announce_batch` accepts a JSON array of announces
//!
//! # Architecture
//!
//! - `AuthorityBackend` trait is the raw transport seam (mocked in tests)
//! - `NanamiHttpBackend` implements it with `reqwest`, one timeout per call
//! - `AuthorityClient` converts wire payloads into an `AllowListSnapshot`
//!   and forwards batches; it never retries, the callers own that policy

/// Authority error enumeration.
pub mod enums;

/// Implementation blocks for the clients.
pub mod impls;

/// Wire payloads and client structs.
pub mod structs;

/// Authority transport trait.
pub mod traits;

/// Unit tests for the authority client.
pub mod tests;
