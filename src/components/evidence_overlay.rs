//! Evidence Overlay Component
//!
//! Full-screen photo viewer. Closes on the × button, a backdrop click or
//! Escape (handled by the detail screen); clicks on the image stay inside.

use leptos::prelude::*;

use crate::detail::ImageOverlay;

#[component]
pub fn EvidenceOverlay(
    overlay: ReadSignal<ImageOverlay>,
    set_overlay: WriteSignal<ImageOverlay>,
) -> impl IntoView {
    move || {
        overlay.with(|o| o.image().map(str::to_owned)).map(|url| {
            view! {
                <div class="image-overlay" on:click=move |_| set_overlay.set(ImageOverlay::Closed)>
                    <div class="image-overlay-frame">
                        <button
                            class="overlay-close-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_overlay.set(ImageOverlay::Closed);
                            }
                        >
                            "×"
                        </button>
                        <img
                            class="overlay-image"
                            src=url
                            alt="Full size evidence"
                            on:click=|ev| ev.stop_propagation()
                        />
                    </div>
                </div>
            }
        })
    }
}
