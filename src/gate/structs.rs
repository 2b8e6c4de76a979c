//! Gate structs.

/// The gate itself.
pub mod approval_gate;

/// Token from a fixed path segment (`/announce/<token>`).
pub mod path_segment_extractor;

/// Token from a query parameter (`?user_id=<token>`).
pub mod query_param_extractor;
