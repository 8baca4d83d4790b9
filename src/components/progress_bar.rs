use leptos::prelude::*;

/// Horizontal completion bar
#[component]
pub fn ProgressBar(percent: u8) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div class="progress-fill" style=format!("width: {}%;", percent.min(100))></div>
        </div>
    }
}
