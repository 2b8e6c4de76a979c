use std::sync::Arc;
use crate::config::structs::nanami_config::NanamiConfig;

pub struct NanamiHttpBackend {
    pub(crate) config: Arc<NanamiConfig>,
    pub(crate) client: reqwest::Client,
}
