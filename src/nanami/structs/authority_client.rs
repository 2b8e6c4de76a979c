use std::sync::Arc;
use crate::nanami::traits::authority_backend::AuthorityBackend;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// One-shot requests to nanami, no state beyond the backend it wraps.
pub struct AuthorityClient {
    pub(crate) backend: Arc<dyn AuthorityBackend>,
    pub(crate) stats: Arc<StatsAtomics>,
}
