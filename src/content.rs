//! Checklist Content Normalizer
//!
//! Turns the raw `content` field of a checklist into ordered groups of items.
//!
//! Content arrives in several shapes depending on which client synced it:
//! - an object `{ "groups": ... }`
//! - a JSON string of that object
//! - a JSON string of a JSON string of that object (double serialization)
//!
//! `groups` and each group's `items` may be arrays or keyed objects. Both are
//! coerced into an [`OrderedCollection`] here so rendering never sees the
//! difference.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::ChecklistContent;

/// How many string layers are unwrapped before giving up
const MAX_DECODE_DEPTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("checklist content is not valid JSON: {0}")]
    Decode(String),
    #[error("invalid checklist format: {0}")]
    InvalidFormat(&'static str),
}

impl ContentError {
    /// Message shown in place of the checklist body
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Decode(_) => "Error parsing checklist data",
            Self::InvalidFormat(_) => "Invalid checklist format",
        }
    }
}

/// Ordered sequence decoded from either a JSON array or a JSON object.
///
/// Objects contribute their values in key order as delivered. `null` entries
/// are skipped and other non-object entries decode as an empty entry, so they
/// still count. Any other JSON type yields an empty collection.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCollection<T>(Vec<T>);

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: DeserializeOwned> OrderedCollection<T> {
    pub fn from_value(value: Value) -> Self {
        let entries = match value {
            Value::Array(values) => values,
            Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
            _ => Vec::new(),
        };

        Self(
            entries
                .into_iter()
                .filter_map(|entry| match entry {
                    Value::Null => None,
                    Value::Object(_) => serde_json::from_value(entry).ok(),
                    _ => serde_json::from_value(Value::Object(Map::new())).ok(),
                })
                .collect(),
        )
    }
}

impl<T> OrderedCollection<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for OrderedCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Normalize raw checklist content into groups and items
pub fn normalize(raw: &Value) -> Result<ChecklistContent, ContentError> {
    let Value::Object(mut fields) = decode(raw)? else {
        return Err(ContentError::InvalidFormat("content is not an object"));
    };

    match fields.remove("groups") {
        Some(groups) if !is_blank(&groups) => Ok(ChecklistContent {
            groups: OrderedCollection::from_value(groups).into_vec(),
        }),
        _ => Err(ContentError::InvalidFormat("missing groups")),
    }
}

/// `null`, `false`, zero and `""` all mean the field was never filled in
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Unwrap up to [`MAX_DECODE_DEPTH`] layers of JSON string encoding
fn decode(raw: &Value) -> Result<Value, ContentError> {
    let mut current = raw.clone();
    for _ in 0..MAX_DECODE_DEPTH {
        let Value::String(text) = &current else {
            break;
        };
        let next = serde_json::from_str(text).map_err(|e| ContentError::Decode(e.to_string()))?;
        current = next;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, ItemStatus};
    use serde_json::json;

    fn item_ids(content: &ChecklistContent) -> Vec<Vec<String>> {
        content
            .groups
            .iter()
            .map(|g| g.items.iter().filter_map(|i| i.id.clone()).collect())
            .collect()
    }

    #[test]
    fn test_object_content() {
        let raw = json!({
            "groups": [
                { "id": 1, "title": "Pagi", "items": [{ "id": 1, "status": "done" }, { "id": 2 }] }
            ]
        });

        let content = normalize(&raw).unwrap();
        assert_eq!(content.groups.len(), 1);
        assert_eq!(content.groups[0].label(), "Pagi");
        assert_eq!(item_ids(&content), vec![vec!["1".to_string(), "2".to_string()]]);
        assert_eq!(content.groups[0].items.iter().next().map(|i| i.status), Some(ItemStatus::Done));
    }

    #[test]
    fn test_array_and_map_encodings_are_equivalent() {
        let as_arrays = json!({
            "groups": [
                { "id": "g1", "items": [{ "id": "a" }, { "id": "b" }] },
                { "id": "g2", "items": [{ "id": "c" }] }
            ]
        });
        let as_maps = json!({
            "groups": {
                "0": { "id": "g1", "items": { "0": { "id": "a" }, "1": { "id": "b" } } },
                "1": { "id": "g2", "items": { "0": { "id": "c" } } }
            }
        });

        let from_arrays = normalize(&as_arrays).unwrap();
        let from_maps = normalize(&as_maps).unwrap();
        assert_eq!(from_arrays, from_maps);
        assert_eq!(item_ids(&from_maps), vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]]);
    }

    #[test]
    fn test_map_keeps_key_order_as_delivered() {
        let raw = r#"{"groups":{"z":{"items":[{"id":"first"}]},"a":{"items":[{"id":"second"}]}}}"#;
        let content = normalize(&json!(raw)).unwrap();
        assert_eq!(item_ids(&content), vec![vec!["first".to_string()], vec!["second".to_string()]]);
    }

    #[test]
    fn test_string_content() {
        let raw = json!(r#"{"groups":[{"items":[{"id":1,"status":"done"}]}]}"#);
        let content = normalize(&raw).unwrap();
        assert_eq!(content.groups[0].items.iter().count(), 1);
    }

    #[test]
    fn test_double_encoded_content() {
        let inner = r#"{"groups":[{"id":1,"items":[{"id":1,"status":"missed"}]}]}"#;
        let once = serde_json::to_string(inner).unwrap();
        let raw = Value::String(once);

        let content = normalize(&raw).unwrap();
        let item: &Item = content.groups[0].items.iter().next().unwrap();
        assert_eq!(item.status, ItemStatus::Missed);
    }

    #[test]
    fn test_triple_encoded_content_is_invalid() {
        let inner = r#"{"groups":[]}"#;
        let twice = serde_json::to_string(&serde_json::to_string(inner).unwrap()).unwrap();
        let err = normalize(&Value::String(twice)).unwrap_err();
        assert!(matches!(err, ContentError::InvalidFormat(_)));
    }

    #[test]
    fn test_malformed_string_is_decode_error() {
        let err = normalize(&json!("{not json")).unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));
        assert_eq!(err.user_message(), "Error parsing checklist data");
    }

    #[test]
    fn test_missing_groups_is_invalid_format() {
        for raw in [
            json!({}),
            json!({ "groups": null }),
            json!({ "groups": false }),
            json!({ "groups": 0 }),
            json!({ "groups": 0.0 }),
            json!({ "groups": "" }),
            json!("{\"items\":[]}"),
            json!("{\"groups\":false}"),
            Value::Null,
            json!(7),
            json!([]),
        ] {
            let err = normalize(&raw).unwrap_err();
            assert!(matches!(err, ContentError::InvalidFormat(_)), "{raw:?}");
            assert_eq!(err.user_message(), "Invalid checklist format");
        }
    }

    #[test]
    fn test_non_collection_items_are_empty() {
        let raw = json!({ "groups": [{ "id": 1, "items": "nope" }, { "id": 2 }] });
        let content = normalize(&raw).unwrap();
        assert_eq!(content.groups.len(), 2);
        assert!(content.groups.iter().all(|g| g.items.iter().next().is_none()));
    }

    #[test]
    fn test_null_entries_are_skipped() {
        let raw = json!({ "groups": [null, { "items": [null, { "id": "kept" }, null] }] });
        let content = normalize(&raw).unwrap();
        assert_eq!(item_ids(&content), vec![vec!["kept".to_string()]]);
    }

    #[test]
    fn test_scalar_entries_become_empty_entries() {
        let raw = json!({ "groups": ["x", { "items": ["a", 3, { "id": "kept", "status": "done" }] }] });
        let content = normalize(&raw).unwrap();
        assert_eq!(content.groups.len(), 2);
        assert_eq!(content.groups[0].label(), "");
        assert!(content.groups[0].items.iter().next().is_none());

        let items: Vec<&Item> = content.groups[1].items.iter().collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], &Item::default());
        assert_eq!(items[1].status, ItemStatus::Pending);
        assert_eq!(items[2].id.as_deref(), Some("kept"));
    }

    #[test]
    fn test_scalar_groups_yield_no_groups() {
        let content = normalize(&json!({ "groups": 5 })).unwrap();
        assert!(content.groups.is_empty());
        let content = normalize(&json!({ "groups": true })).unwrap();
        assert!(content.groups.is_empty());
    }
}
