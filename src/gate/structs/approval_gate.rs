use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use crate::approval::structs::approval_cache::ApprovalCache;
use crate::batcher::structs::announce_batcher::AnnounceBatcher;
use crate::config::structs::nanami_config::NanamiConfig;
use crate::gate::traits::user_token_extractor::UserTokenExtractor;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct ApprovalGate {
    pub(crate) config: Arc<NanamiConfig>,
    pub(crate) cache: Arc<ApprovalCache>,
    pub(crate) batcher: Arc<AnnounceBatcher>,
    pub(crate) extractor: Box<dyn UserTokenExtractor>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) shutdown: CancellationToken,
}
