//! Logout button.

use leptos::*;
use leptos_router::*;

use crate::services::{logout, AuthClient};
use crate::{use_toaster, ToastLevel, LOGIN_PATH};

#[component]
pub fn LogoutButton() -> impl IntoView {
    let client = store_value(AuthClient::from_env());
    let toaster = use_toaster();
    let navigate = use_navigate();
    let (pending, set_pending) = create_signal(false);

    let on_click = move |_| {
        if pending.get_untracked() {
            return;
        }
        set_pending.set(true);

        let navigate = navigate.clone();
        let client = client.get_value();
        spawn_local(async move {
            match logout(&client).await {
                Ok(()) => navigate(LOGIN_PATH, NavigateOptions::default()),
                Err(e) => {
                    toaster.push(ToastLevel::Error, e.to_string());
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <button
            type="button"
            class="logout-button"
            disabled=move || pending.get()
            on:click=on_click
        >
            "Logout"
        </button>
    }
}
