use serde::{Deserialize, Deserializer, Serialize};

/// Loose scalar accepted where the store expects text
#[derive(Deserialize)]
#[serde(untagged)]
enum TextValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl TextValue {
    fn into_text(self) -> Option<String> {
        match self {
            TextValue::String(s) => Some(s),
            TextValue::Int(i) => Some(i.to_string()),
            TextValue::Float(f) => Some(f.to_string()),
            TextValue::Bool(b) => Some(b.to_string()),
            TextValue::Null => None,
        }
    }

    /// Text for key/frag/id: falsy values (`""`, `0`, `false`, null) read as absent
    fn into_truthy_text(self) -> Option<String> {
        match self {
            TextValue::String(s) if s.is_empty() => None,
            TextValue::Int(0) | TextValue::Bool(false) => None,
            TextValue::Float(f) if f == 0.0 || f.is_nan() => None,
            other => other.into_text(),
        }
    }
}

/// Deserialize text from string, number, bool or null (falsy becomes empty)
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(TextValue::deserialize(deserializer)?
        .into_truthy_text()
        .unwrap_or_default())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(TextValue::deserialize(deserializer)?.into_truthy_text())
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<TextValue>> = Option::deserialize(deserializer)?;
    Ok(tags
        .unwrap_or_default()
        .into_iter()
        .map(|tag| tag.into_text().unwrap_or_default())
        .collect())
}

/// A searchable fragment.
///
/// Every field is optional in the store; anything missing reads as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Free-form identifier
    #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Path-like label, e.g. `engine/start`
    #[serde(default, deserialize_with = "deserialize_text")]
    pub key: String,

    /// Body text
    #[serde(default, deserialize_with = "deserialize_text")]
    pub frag: String,

    /// Tags in insertion order (duplicates allowed)
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl Record {
    /// Create a new Record with key and fragment text
    pub fn new(key: impl Into<String>, frag: impl Into<String>) -> Self {
        Self {
            id: None,
            key: key.into(),
            frag: frag.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> &str {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => &self.key,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new("engine/start", "Ignition sequence start")
            .with_id("t1")
            .with_tags(["engine", "start"]);
        assert_eq!(record.id.as_deref(), Some("t1"));
        assert_eq!(record.key, "engine/start");
        assert_eq!(record.tags, vec!["engine", "start"]);
        assert_eq!(record.display_name(), "t1");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let record = Record::from_json("{}").unwrap();
        assert_eq!(record, Record::default());

        let record = Record::from_json(r#"{"key": "brake/check"}"#).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.frag, "");
        assert!(record.tags.is_empty());
        assert_eq!(record.display_name(), "brake/check");
    }

    #[test]
    fn test_null_fields_are_empty() {
        let record =
            Record::from_json(r#"{"id": null, "key": null, "frag": null, "tags": null}"#).unwrap();
        assert_eq!(record, Record::default());
    }

    #[test]
    fn test_scalar_fields_become_text() {
        let record = Record::from_json(r#"{"id": 42, "key": 7, "tags": ["a", 3, null]}"#).unwrap();
        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.key, "7");
        assert_eq!(record.tags, vec!["a", "3", ""]);
    }

    #[test]
    fn test_falsy_fields_are_empty() {
        let record =
            Record::from_json(r#"{"id": 0, "key": false, "frag": 0.0, "tags": [0, false]}"#)
                .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.key, "");
        assert_eq!(record.frag, "");
        // tags are joined, not truth-tested
        assert_eq!(record.tags, vec!["0", "false"]);

        let record = Record::from_json(r#"{"id": "", "key": true}"#).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.key, "true");
    }

    #[test]
    fn test_duplicate_tags_preserved() {
        let record = Record::from_json(r#"{"tags": ["b", "a", "b"]}"#).unwrap();
        assert_eq!(record.tags, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_serialization() {
        let record = Record::new("torque/limit", "Torque limit handler").with_tags(["torque"]);
        let json = record.to_json().unwrap();
        assert!(!json.contains("\"id\""));
        let deserialized = Record::from_json(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
