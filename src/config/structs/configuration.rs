use serde::{Deserialize, Serialize};
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::nanami_config::NanamiConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub nanami: NanamiConfig,
    pub http_server: HttpServerConfig,
}
