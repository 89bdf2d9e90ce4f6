//! Static assets bundled into the binary.

/// Bundled events dataset, in the wire format read by the event store.
pub const EVENTS_JSON: &str = include_str!("../data/events.json");

/// Image reference shown when an event or outlet has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_events_is_a_json_array() {
        let trimmed = EVENTS_JSON.trim_start();
        assert!(trimmed.starts_with('['));
        assert!(EVENTS_JSON.contains("\"narratives\""));
    }
}
