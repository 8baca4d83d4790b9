//! Progress Calculation
//!
//! Percentage of "done" items across all groups of a checklist.

use serde_json::Value;

use crate::content::normalize;
use crate::models::{ChecklistContent, ItemStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn from_content(content: &ChecklistContent) -> Self {
        content
            .groups
            .iter()
            .flat_map(|group| group.items.iter())
            .fold(Self::default(), |mut acc, item| {
                acc.total += 1;
                if item.status == ItemStatus::Done {
                    acc.completed += 1;
                }
                acc
            })
    }

    /// Rounded percentage, half rounds up. 0 when there are no items.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let rounded = (200 * self.completed + self.total) / (2 * self.total);
        rounded.min(100) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.percent() == 100
    }
}

/// Progress of raw checklist content; 0 when the content can't be read
pub fn progress_percent(raw: &Value) -> u8 {
    match normalize(raw) {
        Ok(content) => Progress::from_content(&content).percent(),
        Err(err) => {
            log::debug!("[CONTENT] progress falls back to 0: {}", err);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn progress(completed: usize, total: usize) -> u8 {
        Progress { completed, total }.percent()
    }

    #[test]
    fn test_rounding_boundaries() {
        assert_eq!(progress(1, 3), 33);
        assert_eq!(progress(2, 3), 67);
        assert_eq!(progress(1, 2), 50);
        assert_eq!(progress(1, 8), 13); // 12.5
        assert_eq!(progress(0, 5), 0);
        assert_eq!(progress(5, 5), 100);
        assert_eq!(progress(0, 0), 0);
    }

    #[test]
    fn test_mixed_statuses() {
        let raw = json!({
            "groups": [{
                "id": 1,
                "items": [
                    { "id": 1, "status": "done" },
                    { "id": 2, "status": "missed" },
                    { "id": 3, "status": "pending" }
                ]
            }]
        });
        assert_eq!(progress_percent(&raw), 33);
    }

    #[test]
    fn test_counts_across_groups_and_encodings() {
        let raw = json!({
            "groups": {
                "a": { "items": { "x": { "status": "done" }, "y": { "status": "done" } } },
                "b": { "items": [{ "status": "missed" }] }
            }
        });
        assert_eq!(progress_percent(&raw), 67);
    }

    #[test]
    fn test_empty_groups_is_zero() {
        assert_eq!(progress_percent(&json!({ "groups": [] })), 0);
        assert_eq!(progress_percent(&json!({ "groups": [{ "items": [] }] })), 0);
    }

    #[test]
    fn test_malformed_content_is_zero() {
        assert_eq!(progress_percent(&json!("not json at all")), 0);
        assert_eq!(progress_percent(&json!({ "sections": [] })), 0);
        assert_eq!(progress_percent(&Value::Null), 0);
    }

    #[test]
    fn test_double_encoded_content() {
        let inner = r#"{"groups":[{"items":[{"status":"done"},{"status":"done"}]}]}"#;
        let raw = Value::String(serde_json::to_string(inner).unwrap());
        assert_eq!(progress_percent(&raw), 100);
    }

    #[test]
    fn test_scalar_items_count_as_pending() {
        let raw = json!({ "groups": [{ "items": ["a", "b", { "status": "done" }] }] });
        assert_eq!(progress_percent(&raw), 33);
    }

    #[test]
    fn test_blank_groups_is_zero() {
        for raw in [json!({ "groups": false }), json!({ "groups": 0 }), json!({ "groups": "" })] {
            assert_eq!(progress_percent(&raw), 0, "{raw:?}");
        }
    }

    #[test]
    fn test_from_content_counts() {
        let content = normalize(&json!({
            "groups": [
                { "items": [{ "status": "done" }, {}] },
                { "items": [{ "status": "done" }] }
            ]
        }))
        .unwrap();
        let progress = Progress::from_content(&content);
        assert_eq!(progress, Progress { completed: 2, total: 3 });
        assert!(!progress.is_complete());
    }
}
