use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Payload for the `POST /logs` test request.
///
/// Timestamps serialize as RFC 3339 strings via chrono's serde support.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub note: String,
}

impl LogEntry {
    /// Fixed test entry covering the hour leading up to now.
    pub fn test_data() -> Self {
        let end_time = Utc::now();
        Self {
            start_time: end_time - Duration::hours(1),
            end_time,
            note: "Test Data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_spans_exactly_one_hour() {
        let entry = LogEntry::test_data();
        assert_eq!(entry.end_time - entry.start_time, Duration::hours(1));
        assert_eq!(entry.note, "Test Data");
    }

    #[test]
    fn serialized_timestamps_are_rfc3339() {
        let entry = LogEntry::test_data();
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
        for field in ["start_time", "end_time"] {
            let raw = json[field].as_str().unwrap();
            DateTime::parse_from_rfc3339(raw).unwrap();
        }
        assert_eq!(json["note"], "Test Data");
    }
}
