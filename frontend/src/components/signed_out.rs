//! Landing page after logout.

use leptos::*;
use leptos_router::*;

#[component]
pub fn SignedOut() -> impl IntoView {
    view! {
        <div class="container">
            <div class="hero">
                <h1>"You have been logged out"</h1>
                <p class="subtitle">"Your session has ended."</p>
                <A href="/" class="home-link">"Back to uploads"</A>
            </div>
        </div>
    }
}
