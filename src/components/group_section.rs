//! Group Section Component
//!
//! Titled block of item rows.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::models::Group;

#[component]
pub fn GroupSection(group: Group, on_open_image: Callback<String>) -> impl IntoView {
    let label = group.label().to_string();
    let items = group.items.into_vec();

    view! {
        <section class="group-section">
            <div class="group-title">{label}</div>
            <div class="group-items">
                {if items.is_empty() {
                    view! { <p class="empty-group">"No items"</p> }.into_any()
                } else {
                    items
                        .into_iter()
                        .map(|item| view! { <ItemRow item=item on_open_image=on_open_image /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </section>
    }
}
