//! Message log record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sent-message record.
///
/// Records are immutable once appended and carry no uniqueness constraint
/// on any field; duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Destination phone number in provider format (e.g. "+14155551234")
    pub phone: String,

    /// Optional free-text sender/display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Message body as sent to the provider
    pub message: String,

    /// Creation time, assigned by the store at append time
    pub timestamp: DateTime<Utc>,
}

impl MessageRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        phone: impl Into<String>,
        name: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            name,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization_round_trip() {
        let record = MessageRecord::new("+14155551234", Some("Alice".into()), "hello");

        let json = serde_json::to_string(&record).unwrap();
        let restored: MessageRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, record);
    }

    #[test]
    fn test_record_without_name_omits_field() {
        let record = MessageRecord::new("+14155551234", None, "hello");

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("name"));

        let restored: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.name, None);
    }

    #[test]
    fn test_record_timestamp_is_iso8601() {
        let record = MessageRecord::new("+14155551234", None, "hello");

        let value = serde_json::to_value(&record).unwrap();
        let ts = value["timestamp"].as_str().unwrap();

        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }
}
