use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::Mutex;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use crate::nanami::structs::single_user_announce::SingleUserAnnounce;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct AnnounceBatcher {
    pub(crate) sender: Sender<SingleUserAnnounce>,
    pub(crate) closed: AtomicBool,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) shutdown: CancellationToken,
    pub(crate) consumer_task: Mutex<Option<JoinHandle<()>>>,
}
