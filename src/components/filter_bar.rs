//! Filter Bar Component
//!
//! Start date, end date and location inputs with apply/clear buttons.

use leptos::prelude::*;

use crate::filters::FilterField;
use crate::store::{store_set_filter, DashboardStateStoreFields, DashboardStore};

/// Filter form for the dashboard
///
/// # Arguments
/// * `store` - Dashboard store holding the form values
/// * `on_apply` - Called on submit with the current form values already in the store
/// * `on_clear` - Called after the user asks to reset every filter
#[component]
pub fn FilterBar(
    store: DashboardStore,
    #[prop(into)] on_apply: Callback<()>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_apply.run(());
    };

    view! {
        <form class="filter-bar" on:submit=on_submit>
            <FilterInput store=store field=FilterField::StartDate label="Start Date" input_type="date" />
            <FilterInput store=store field=FilterField::EndDate label="End Date" input_type="date" />
            <FilterInput
                store=store
                field=FilterField::Location
                label="Location"
                input_type="text"
                placeholder="Filter by location..."
            />
            <div class="filter-actions">
                <button type="submit" class="filter-btn">"Filter"</button>
                <button type="button" class="clear-btn" on:click=move |_| on_clear.run(())>
                    "× Clear"
                </button>
            </div>
        </form>
    }
}

/// One labelled filter input bound to a store field
#[component]
fn FilterInput(
    store: DashboardStore,
    field: FilterField,
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-label">{label}</span>
            <input
                type=input_type
                name=field.param()
                placeholder=placeholder
                prop:value=move || store.filters().read().value(field).to_string()
                on:input=move |ev| store_set_filter(&store, field, event_target_value(&ev))
            />
        </label>
    }
}
