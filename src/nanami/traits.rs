//! Authority transport trait.

/// Raw request/response seam to nanami.
pub mod authority_backend;
