//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload your files"</h1>
            <p class="subtitle">
                "Drop a document, a recording or a video. "
                "It is stored as soon as the upload completes."
            </p>
        </div>
    }
}
