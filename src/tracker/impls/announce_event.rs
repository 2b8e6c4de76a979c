use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Parses the `event` query value. Unknown or empty values are regular updates.
    pub fn from_query_value(value: &str) -> AnnounceEvent {
        match value.to_lowercase().as_str() {
            "started" => AnnounceEvent::Started,
            "stopped" => AnnounceEvent::Stopped,
            "completed" => AnnounceEvent::Completed,
            _ => AnnounceEvent::None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}
