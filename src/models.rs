//! Frontend Models
//!
//! Data structures matching the remote task API.
//!
//! The API is loose about types (ids arrive as numbers or strings, GPS
//! coordinates sometimes as strings), so optional fields are decoded leniently
//! and anything unrecognised becomes `None` instead of failing the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::content::OrderedCollection;

/// Checklist record as returned by `GET /tasks` and `GET /tasks/detail/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    #[serde(default, deserialize_with = "required_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_synced_at: Option<String>,
    #[serde(default)]
    pub user: Option<ChecklistUser>,
    /// Raw content: an object, or a JSON string (possibly encoded twice)
    #[serde(default)]
    pub content: Value,
}

impl Checklist {
    pub fn username(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .unwrap_or("Unknown User")
    }

    pub fn location(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.location.as_deref())
            .filter(|l| !l.trim().is_empty())
    }
}

/// Submitting user (matches backend `user` include)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChecklistUser {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
}

/// Response envelope of the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub rows: Option<Vec<Checklist>>,
}

impl TaskList {
    pub fn into_rows(self) -> Vec<Checklist> {
        self.rows.unwrap_or_default()
    }
}

/// Decoded checklist content
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChecklistContent {
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Group {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default)]
    pub items: OrderedCollection<Item>,
}

impl Group {
    /// Display label: `title`, then `name`
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_checked_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub missed_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gps_lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gps_lon: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub photo_uri: Option<String>,
}

impl Item {
    /// GPS pair, only when both coordinates are present
    pub fn gps(&self) -> Option<(f64, f64)> {
        self.gps_lat.zip(self.gps_lon)
    }
}

/// Item completion status; anything but "done"/"missed" is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemStatus {
    Done,
    Missed,
    #[default]
    Pending,
}

impl ItemStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "done" => Self::Done,
            "missed" => Self::Missed,
            _ => Self::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::Missed => "Missed",
            Self::Pending => "Pending",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Done => "status-badge done",
            Self::Missed => "status-badge missed",
            Self::Pending => "status-badge pending",
        }
    }
}

impl<'de> Deserialize<'de> for ItemStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(raw)) => Self::from_raw(&raw),
            _ => Self::Pending,
        })
    }
}

// ========================
// Lenient field decoders
// ========================

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn required_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(Option::unwrap_or_default)
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|v: &f64| v.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checklist_numeric_id_and_missing_user() {
        let checklist: Checklist = serde_json::from_value(json!({
            "id": 42,
            "date": "2026-10-16",
            "lastSyncedAt": "2026-10-16T08:00:00Z",
            "content": "{}"
        }))
        .unwrap();

        assert_eq!(checklist.id, "42");
        assert_eq!(checklist.username(), "Unknown User");
        assert_eq!(checklist.location(), None);
        assert_eq!(checklist.content, json!("{}"));
    }

    #[test]
    fn test_checklist_user_location() {
        let checklist: Checklist = serde_json::from_value(json!({
            "id": "abc",
            "user": { "username": "budi", "location": "Gudang A" }
        }))
        .unwrap();

        assert_eq!(checklist.username(), "budi");
        assert_eq!(checklist.location(), Some("Gudang A"));
        assert_eq!(checklist.content, Value::Null);
    }

    #[test]
    fn test_task_list_rows_absent_or_null() {
        let absent: TaskList = serde_json::from_str("{}").unwrap();
        assert!(absent.into_rows().is_empty());

        let null: TaskList = serde_json::from_str(r#"{"rows": null}"#).unwrap();
        assert!(null.into_rows().is_empty());
    }

    #[test]
    fn test_item_status_mapping() {
        let items: Vec<Item> = serde_json::from_value(json!([
            { "status": "done" },
            { "status": "missed" },
            { "status": "pending" },
            { "status": "DONE" },
            { "status": 1 },
            {}
        ]))
        .unwrap();

        let statuses: Vec<ItemStatus> = items.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                ItemStatus::Done,
                ItemStatus::Missed,
                ItemStatus::Pending,
                ItemStatus::Pending,
                ItemStatus::Pending,
                ItemStatus::Pending,
            ]
        );
    }

    #[test]
    fn test_item_gps_requires_both_coordinates() {
        let item: Item = serde_json::from_value(json!({
            "gpsLat": -6.2,
            "gpsLon": "106.8"
        }))
        .unwrap();
        assert_eq!(item.gps(), Some((-6.2, 106.8)));

        let half: Item = serde_json::from_value(json!({ "gpsLat": -6.2 })).unwrap();
        assert_eq!(half.gps(), None);

        let garbage: Item = serde_json::from_value(json!({ "gpsLat": "n/a", "gpsLon": 1 })).unwrap();
        assert_eq!(garbage.gps(), None);
    }

    #[test]
    fn test_group_label_fallback() {
        let titled = Group { title: Some("Pagi".into()), name: Some("morning".into()), ..Default::default() };
        assert_eq!(titled.label(), "Pagi");

        let named = Group { name: Some("morning".into()), ..Default::default() };
        assert_eq!(named.label(), "morning");

        assert_eq!(Group::default().label(), "");
    }
}
