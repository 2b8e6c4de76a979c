use serde::{Deserialize, Serialize};
use crate::config::enums::user_token_source::UserTokenSource;
use crate::tracker::enums::client_id_scheme::ClientIdScheme;

/// Settings for talking to nanami and for the gate built on top of it.
///
/// Every field except `nanami_address` has a default, so the smallest valid
/// section is just the address. Intervals and timeouts are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NanamiConfig {
    pub nanami_address: String,
    pub refresh_interval: u64,
    pub request_timeout: u64,
    pub batch_size: usize,
    pub batch_flush_interval: u64,
    pub queue_capacity: usize,
    pub user_token_source: UserTokenSource,
    pub user_token_segment: usize,
    pub user_token_param: String,
    pub client_id_scheme: ClientIdScheme,
}
