use serde::{Deserialize, Serialize};

/// Announce `event` parameter.
///
/// `None` is a regular interval update. The discriminants are the values sent
/// to nanami in the telemetry `event` field.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnounceEvent {
    #[default]
    None = 0,
    Started = 1,
    Stopped = 2,
    Completed = 3
}
