//! Implementation blocks for the approval cache.

/// AllowListSnapshot: construction and membership checks.
pub mod allow_list_snapshot;

/// ApprovalCache: read, replace and refresh loop.
pub mod approval_cache;
