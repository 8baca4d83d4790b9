//! Photo Evidence Component
//!
//! Thumbnail of an item photo. Device-local references never hit the
//! network; remote ones fall back to a placeholder if they fail to load.

use leptos::prelude::*;

use crate::evidence::{PhotoRef, MISSING_PHOTO_PLACEHOLDER};

#[component]
pub fn PhotoEvidence(photo: PhotoRef, on_open_image: Callback<String>) -> impl IntoView {
    match photo {
        PhotoRef::DeviceLocal => view! {
            <div class="photo-local-notice">"🖼 Image stored locally on device"</div>
        }
        .into_any(),
        PhotoRef::Remote(url) => view! { <RemotePhoto url=url on_open_image=on_open_image /> }.into_any(),
    }
}

#[component]
fn RemotePhoto(url: String, on_open_image: Callback<String>) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    let src = {
        let url = url.clone();
        move || if failed.get() { MISSING_PHOTO_PLACEHOLDER.to_string() } else { url.clone() }
    };

    view! {
        <div class="photo-thumb" on:click=move |_| on_open_image.run(url.clone())>
            <img
                src=src
                alt="Checklist evidence"
                class=move || if failed.get() { "photo-img broken" } else { "photo-img" }
                on:error=move |_| {
                    // Swap once; a failing placeholder must not loop
                    if !failed.get_untracked() {
                        log::warn!("[DETAIL] Photo failed to load, showing placeholder");
                        set_failed.set(true);
                    }
                }
            />
            <div class="photo-zoom">"🔍"</div>
        </div>
    }
}
