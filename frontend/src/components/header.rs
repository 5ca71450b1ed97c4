use leptos::*;

use crate::{LogoutButton, APP_NAME};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <LogoutButton/>
            </div>
        </header>
    }
}
