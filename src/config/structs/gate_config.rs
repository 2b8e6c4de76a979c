use serde::{Deserialize, Serialize};

/// The options block a host passes when it instantiates the gate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub nanami_address: String,
}
