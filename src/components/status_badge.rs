use leptos::prelude::*;

use crate::models::ItemStatus;

/// Done / Missed / Pending marker
#[component]
pub fn StatusBadge(status: ItemStatus) -> impl IntoView {
    let icon = match status {
        ItemStatus::Done => "✓",
        ItemStatus::Missed => "✗",
        ItemStatus::Pending => "○",
    };

    view! {
        <div class=status.css_class()>
            <span class="status-icon">{icon}</span>
            <span class="status-label">{status.label()}</span>
        </div>
    }
}
