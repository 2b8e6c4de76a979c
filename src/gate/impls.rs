//! Implementation blocks for the gate.

/// ApprovalGate: construction, decisions, Hook, shutdown.
pub mod approval_gate;

/// PathSegmentExtractor: UserTokenExtractor over the request path.
pub mod path_segment_extractor;

/// QueryParamExtractor: UserTokenExtractor over the query string.
pub mod query_param_extractor;
