//! Item Row Component
//!
//! A single checklist item: title, timestamps, GPS link, photo and status.

use leptos::prelude::*;

use crate::components::{PhotoEvidence, StatusBadge};
use crate::evidence::{maps_url, PhotoRef};
use crate::format::{format_date_time, format_time};
use crate::models::Item;

#[component]
pub fn ItemRow(item: Item, on_open_image: Callback<String>) -> impl IntoView {
    let title = item.title.clone().unwrap_or_default();
    let checked = item.last_checked_at.as_deref().map(format_date_time);
    let missed = item.missed_at.as_deref().map(format_time);
    let photo = item.photo_uri.as_deref().and_then(PhotoRef::classify);

    view! {
        <div class="item-row">
            <div class="item-body">
                <p class="item-title">{title}</p>

                <div class="item-evidence">
                    {checked.map(|time| view! { <p class="item-checked">"🕒 Checked: " {time}</p> })}

                    {item.gps().map(|(lat, lon)| view! {
                        <a
                            class="item-location"
                            href=maps_url(lat, lon)
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {format!("📍 Location: {}, {}", lat, lon)}
                        </a>
                    })}

                    {photo.map(|photo| view! { <PhotoEvidence photo=photo on_open_image=on_open_image /> })}
                </div>

                {missed.map(|time| view! { <p class="item-missed">"Missed at: " {time}</p> })}
            </div>

            <StatusBadge status=item.status />
        </div>
    }
}
