//! Dashboard View State
//!
//! Per-screen state for the checklist list, using Leptos reactive_stores for
//! fine-grained reactivity. Each dashboard owns its own store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiError;
use crate::filters::{ChecklistFilters, FilterField};
use crate::models::Checklist;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Filter form contents (not yet applied until submit)
    pub filters: ChecklistFilters,
    /// Filters sent with the latest request
    pub applied: ChecklistFilters,
    /// Rows of the last applied request
    pub checklists: Vec<Checklist>,
    pub loading: bool,
    /// Ticket counter for list requests
    pub requests: RequestSequence,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Orders responses of overlapping requests: only the most recently issued
/// ticket may update the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Rows to show after a list request; failures clear the list
pub fn rows_after_fetch(result: Result<Vec<Checklist>, ApiError>) -> Vec<Checklist> {
    match result {
        Ok(rows) => {
            log::info!("[DASHBOARD] Loaded {} checklists", rows.len());
            rows
        }
        Err(err) => {
            log::error!("[DASHBOARD] Error fetching checklists: {}", err);
            Vec::new()
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Start a list request for `filters`; returns its ticket
pub fn store_begin_request(store: &DashboardStore, filters: &ChecklistFilters) -> u64 {
    *store.applied().write() = filters.clone();
    *store.loading().write() = true;
    store.requests().write().issue()
}

/// Apply a finished request if it is still the latest one.
/// Returns false for stale responses.
pub fn store_finish_request(
    store: &DashboardStore,
    ticket: u64,
    result: Result<Vec<Checklist>, ApiError>,
) -> bool {
    let current = store
        .requests()
        .try_with_untracked(|seq| seq.is_current(ticket))
        .unwrap_or(false);
    if !current {
        log::debug!("[DASHBOARD] Dropping stale response for request #{}", ticket);
        return false;
    }
    *store.checklists().write() = rows_after_fetch(result);
    *store.loading().write() = false;
    true
}

/// Update one filter field
pub fn store_set_filter(store: &DashboardStore, field: FilterField, value: String) {
    store.filters().write().set(field, value);
}

/// Reset every filter field
pub fn store_clear_filters(store: &DashboardStore) {
    store.filters().write().clear();
}
