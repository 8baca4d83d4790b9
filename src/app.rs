//! Checklist Dashboard App
//!
//! Root component: hash routing between the list and the detail screen.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{ChecklistDetail, Dashboard};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::{current_route, Route};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (route, set_route) = signal(current_route());

    let hash_listener = window_event_listener(ev::hashchange, move |_| {
        let next = current_route();
        log::debug!("[APP] Route changed to {:?}", next);
        set_route.set(next);
    });
    on_cleanup(move || hash_listener.remove());

    provide_context(AppContext::new(config));

    let checklist_id = Memo::new(move |_| route.get().checklist_id().map(str::to_owned));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <a class="app-title" href=Route::Dashboard.href()>"Daily Checklists"</a>
            </header>

            <main class="main-content">
                <Show
                    when=move || checklist_id.get().is_some()
                    fallback=|| view! { <Dashboard /> }
                >
                    <ChecklistDetail id=Signal::derive(move || checklist_id.get().unwrap_or_default()) />
                </Show>
            </main>
        </div>
    }
}
