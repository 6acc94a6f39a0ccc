//! The record value type.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format used for stored records: ISO-8601, second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single contact entry collected from the user.
///
/// Field order here is the order the fields appear in the stored JSON.
/// A record is immutable in practice: the timestamp is stamped once at
/// creation and never recomputed. Duplicate entries are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    /// Free-form notes, may be empty.
    pub notes: String,
    /// Local creation time, `YYYY-MM-DDTHH:MM:SS`.
    pub timestamp: String,
}

impl Record {
    /// Create a record stamped with the current local time.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        phone: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            phone: phone.into(),
            notes: notes.into(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_new_record_timestamp_is_iso8601_seconds() {
        let record = Record::new("Somchai", 30, "s@example.com", "0812345678", "");
        assert!(
            NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok(),
            "unexpected timestamp format: {}",
            record.timestamp
        );
    }

    #[test]
    fn test_record_rejects_unknown_fields() {
        let json = r#"{
            "name": "x", "age": 1, "email": "e", "phone": "p",
            "notes": "", "timestamp": "2024-01-01T00:00:00", "extra": true
        }"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_record_rejects_missing_fields() {
        let json = r#"{"name": "x"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_record_serializes_in_field_order() {
        let record = Record::new("a", 1, "b", "c", "d");
        let json = serde_json::to_string(&record).unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let age_pos = json.find("\"age\"").unwrap();
        let ts_pos = json.find("\"timestamp\"").unwrap();
        assert!(name_pos < age_pos && age_pos < ts_pos);
    }
}
