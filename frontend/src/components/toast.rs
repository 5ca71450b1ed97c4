//! Toast notifications.
//!
//! A [`Toaster`] is provided once at the app root; components fetch it with
//! [`use_toaster`] and push messages that expire on their own.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::dropzone::Notifier;
use crate::{Toast, ToastLevel, TOAST_DURATION_MS};

/// Pending toasts, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle to the toast queue. Cheap to copy.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.toasts().to_vec())
    }

    /// Show a toast and schedule its removal.
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let message = message.into();
        log::debug!("{} toast: {}", level.emoji(), message);

        let id = self
            .queue
            .try_update(|queue| queue.push(level, message))
            .unwrap_or_default();

        let toaster = *self;
        Timeout::new(TOAST_DURATION_MS, move || toaster.dismiss(id)).forget();

        id
    }

    pub fn dismiss(&self, id: u64) {
        _ = self.queue.try_update(|queue| queue.dismiss(id));
    }
}

impl Notifier for Toaster {
    fn success(&self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastLevel::Error, message);
    }
}

/// Install a [`Toaster`] in the current reactive scope.
pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// Fetch the [`Toaster`] installed by [`provide_toaster`].
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the pending toasts. Click one to dismiss it.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-stack">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.level.css_class()
                            role="status"
                            on:click=move |_| toaster.dismiss(id)
                        >
                            {toast.level.emoji()} " " {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
