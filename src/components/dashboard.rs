//! Dashboard Component
//!
//! Checklist list with date/location filters. Filtering is done by the API;
//! this screen only builds the request and replaces its rows.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ChecklistCard, FilterBar};
use crate::context::use_app_context;
use crate::filters::ChecklistFilters;
use crate::store::{
    store_begin_request, store_clear_filters, store_finish_request, DashboardState,
    DashboardStateStoreFields,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(DashboardState::new());

    // Issue a list request; only the latest one may update the store
    let fetch_checklists = move |filters: ChecklistFilters| {
        let ticket = store_begin_request(&store, &filters);
        let base = ctx.api_base_url();
        spawn_local(async move {
            let result = api::list_tasks(&base, &filters).await;
            store_finish_request(&store, ticket, result);
        });
    };

    // Initial unfiltered load
    fetch_checklists(ChecklistFilters::default());

    let on_apply = Callback::new(move |_: ()| {
        let filters = store.filters().get_untracked();
        log::info!("[DASHBOARD] Applying filters: {:?}", filters.query_pairs());
        fetch_checklists(filters);
    });

    let on_clear = Callback::new(move |_: ()| {
        store_clear_filters(&store);
        fetch_checklists(ChecklistFilters::default());
    });

    let list = move || {
        if store.loading().get() {
            return view! { <div class="loading">"Loading..."</div> }.into_any();
        }

        if store.checklists().read().is_empty() {
            let message = if store.applied().read().is_empty() {
                "No checklists have been submitted yet."
            } else {
                "No checklists found matching your filters."
            };
            return view! {
                <div class="empty-state">
                    <p>{message}</p>
                    <button class="link-btn" on:click=move |_| on_clear.run(())>"Clear filters"</button>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="checklist-grid">
                <For
                    each=move || store.checklists().get()
                    key=|checklist| checklist.id.clone()
                    children=move |checklist| view! { <ChecklistCard checklist=checklist /> }
                />
            </div>
        }
        .into_any()
    };

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>"Daily Checklists"</h1>
                <FilterBar store=store on_apply=on_apply on_clear=on_clear />
            </div>
            {list}
        </div>
    }
}
