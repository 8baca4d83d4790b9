//! Checklist Card Component
//!
//! Summary card on the dashboard, linking to the detail screen.

use leptos::prelude::*;

use crate::components::ProgressBar;
use crate::format::{format_long_date, format_time};
use crate::models::Checklist;
use crate::progress::progress_percent;
use crate::route::Route;

#[component]
pub fn ChecklistCard(checklist: Checklist) -> impl IntoView {
    let percent = progress_percent(&checklist.content);
    let href = Route::Checklist(checklist.id.clone()).href();
    let date = format_long_date(checklist.date.as_deref().unwrap_or_default());
    let synced = checklist.last_synced_at.as_deref().map(format_time);
    let username = checklist.username().to_string();
    let location = checklist.location().map(str::to_owned);

    let badge_class = if percent == 100 { "progress-badge complete" } else { "progress-badge" };

    view! {
        <a class="checklist-card" href=href>
            <div class="card-header">
                <span class="card-date">"📅 " {date}</span>
                <span class=badge_class>{format!("{}% Done", percent)}</span>
            </div>

            <div class="card-user">
                <span class="card-username">"👤 " {username}</span>
                {location.map(|loc| view! { <span class="location-chip">"📍 " {loc}</span> })}
            </div>

            <ProgressBar percent=percent />

            <div class="card-footer">
                {synced.map(|time| view! { <span class="card-synced">"🕒 Last synced: " {time}</span> })}
            </div>
        </a>
    }
}
