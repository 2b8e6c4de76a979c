use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use crate::approval::structs::allow_list_snapshot::AllowListSnapshot;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct ApprovalCache {
    pub(crate) current: RwLock<Arc<AllowListSnapshot>>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) shutdown: CancellationToken,
    pub(crate) refresh_task: Mutex<Option<JoinHandle<()>>>,
}
