//! Wire payloads and client structs.

/// `approval` response body.
pub mod approval_info;

/// One announce as reported to nanami.
pub mod single_user_announce;

/// Ordered batch of announces, serialized as a JSON array.
pub mod announce_batch;

/// Snapshot-producing client on top of a backend.
pub mod authority_client;

/// reqwest-backed transport.
pub mod nanami_http_backend;
