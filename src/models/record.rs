//! Record types returned by the record service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a record, stable within its zone.
///
/// The service may send ids as JSON strings or numbers; both are held as
/// their string form so `7` and `"7"` name the same record.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

/// A single DNS-style record.
///
/// Records are never edited in place: every fetch replaces the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub content: String,
}

impl Record {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
        }
    }

    /// Row label: `name (type): content`.
    pub fn label(&self) -> String {
        format!("{} ({}): {}", self.name, self.record_type, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_service_json() {
        let json = r#"[
            {"id": "023e105f4ecef8ad9ca31a8372d0c353", "name": "example.com", "type": "A", "content": "198.51.100.4"},
            {"id": 42, "name": "www.example.com", "type": "CNAME", "content": "example.com"}
        ]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "023e105f4ecef8ad9ca31a8372d0c353");
        assert_eq!(records[0].record_type, "A");
        assert_eq!(records[1].id, RecordId::from(42u64));
        assert_eq!(records[1].content, "example.com");
    }

    #[test]
    fn test_record_missing_optional_fields() {
        let record: Record = serde_json::from_str(r#"{"id": "1", "type": "TXT"}"#).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.content, "");
    }

    #[test]
    fn test_record_without_type_is_rejected() {
        assert!(serde_json::from_str::<Record>(r#"{"id": "1", "name": "a"}"#).is_err());
    }

    #[test]
    fn test_record_serializes_type_field() {
        let record = Record::new("1", "a.example", "MX", "10 mail.example");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "MX");
        assert_eq!(json["id"], "1");
    }

    #[test]
    fn test_label() {
        let record = Record::new("1", "www.example.com", "CNAME", "example.com");
        assert_eq!(record.label(), "www.example.com (CNAME): example.com");
    }
}
