//! Task Endpoints
//!
//! `GET {base}/tasks` and `GET {base}/tasks/detail/{id}`.

use percent_encoding::utf8_percent_encode;

use super::{get_text, ApiError, URL_COMPONENT};
use crate::filters::ChecklistFilters;
use crate::models::{Checklist, TaskList};

// ========================
// URLs
// ========================

pub fn tasks_url(base: &str, filters: &ChecklistFilters) -> String {
    let query = filters.query_string();
    if query.is_empty() {
        format!("{}/tasks", base)
    } else {
        format!("{}/tasks?{}", base, query)
    }
}

pub fn task_detail_url(base: &str, id: &str) -> String {
    format!("{}/tasks/detail/{}", base, utf8_percent_encode(id, URL_COMPONENT))
}

// ========================
// Commands
// ========================

/// Checklist summaries matching `filters`
pub async fn list_tasks(base: &str, filters: &ChecklistFilters) -> Result<Vec<Checklist>, ApiError> {
    let url = tasks_url(base, filters);
    log::debug!("[API] GET {}", url);

    let response = get_text(&url).await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    parse_task_list(&response.body)
}

/// One checklist; `Ok(None)` when the server doesn't know the id
pub async fn get_task(base: &str, id: &str) -> Result<Option<Checklist>, ApiError> {
    let url = task_detail_url(base, id);
    log::debug!("[API] GET {}", url);

    let response = get_text(&url).await?;
    if response.status == 404 {
        return Ok(None);
    }
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    parse_task_detail(&response.body)
}

pub fn parse_task_list(body: &str) -> Result<Vec<Checklist>, ApiError> {
    serde_json::from_str::<TaskList>(body)
        .map(TaskList::into_rows)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn parse_task_detail(body: &str) -> Result<Option<Checklist>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
