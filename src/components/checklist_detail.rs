//! Checklist Detail Component
//!
//! One checklist with all groups and items. Reloads when the id changes.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{EvidenceOverlay, GroupSection, ProgressBar};
use crate::context::use_app_context;
use crate::detail::{DetailState, ImageOverlay, LoadedChecklist};
use crate::format::{format_date_time, format_long_date};
use crate::route::Route;
use crate::store::RequestSequence;

#[component]
pub fn ChecklistDetail(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(DetailState::Loading);
    let (overlay, set_overlay) = signal(ImageOverlay::Closed);
    let requests = StoredValue::new(RequestSequence::default());

    // Load checklist whenever the id changes
    Effect::new(move |_| {
        let id = id.get();
        set_state.set(DetailState::Loading);
        set_overlay.set(ImageOverlay::Closed);

        let mut ticket = 0;
        requests.update_value(|seq| ticket = seq.issue());
        let base = ctx.api_base_url();

        spawn_local(async move {
            let fetched = api::get_task(&base, &id).await;
            let current = requests
                .try_with_value(|seq| seq.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("[DETAIL] Dropping stale response for {}", id);
                return;
            }
            set_state.set(DetailState::from_fetch(fetched));
        });
    });

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_overlay.set(ImageOverlay::Closed);
        }
    });
    on_cleanup(move || key_listener.remove());

    let on_open_image = Callback::new(move |url: String| set_overlay.set(ImageOverlay::Open(url)));

    let body = move || match state.get() {
        DetailState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        DetailState::NotFound => view! { <div class="detail-error">"Checklist not found"</div> }.into_any(),
        DetailState::FormatError(err) => {
            view! { <div class="detail-error">{err.user_message()}</div> }.into_any()
        }
        DetailState::Loaded(loaded) => {
            view! { <LoadedDetail loaded=loaded on_open_image=on_open_image /> }.into_any()
        }
    };

    view! {
        <div class="checklist-detail">
            <EvidenceOverlay overlay=overlay set_overlay=set_overlay />
            {body}
        </div>
    }
}

/// Header and groups of a successfully loaded checklist
#[component]
fn LoadedDetail(loaded: LoadedChecklist, on_open_image: Callback<String>) -> impl IntoView {
    let LoadedChecklist { checklist, content, progress } = loaded;

    let date = format_long_date(checklist.date.as_deref().unwrap_or_default());
    let synced = checklist
        .last_synced_at
        .as_deref()
        .map(format_date_time)
        .unwrap_or_else(|| "-".to_string());
    let username = checklist.username().to_string();
    let location = checklist.location().map(str::to_owned);
    let percent = progress.percent();
    let summary = format!("{} of {} done ({}%)", progress.completed, progress.total, percent);
    let progress_class = if progress.is_complete() { "detail-progress complete" } else { "detail-progress" };

    view! {
        <div class="detail-header">
            <a class="back-btn" href=Route::Dashboard.href()>"←"</a>
            <div>
                <h1>"Checklist Detail"</h1>
                <p class="detail-date">"📅 " {date}</p>
            </div>
        </div>

        <div class="detail-card">
            <div class="detail-meta">
                <div class="detail-submitter">
                    <p class="meta-label">"Submitted by"</p>
                    <p class="meta-value">{username}</p>
                    {location.map(|loc| view! { <span class="location-chip">"📍 " {loc}</span> })}
                </div>
                <div class="detail-synced">
                    <p class="meta-label">"Last Synced"</p>
                    <p class="meta-value">"🕒 " {synced}</p>
                </div>
            </div>

            <div class=progress_class>
                <span class="progress-summary">{summary}</span>
                <ProgressBar percent=percent />
            </div>

            <div class="group-list">
                {if content.groups.is_empty() {
                    view! { <p class="empty-group">"This checklist has no groups."</p> }.into_any()
                } else {
                    content
                        .groups
                        .into_iter()
                        .map(|group| view! { <GroupSection group=group on_open_image=on_open_image /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
