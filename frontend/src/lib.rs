//! Filedrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading single files by drag & drop
//! or through the file picker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (logout button)                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent ("/")                                           │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadDropzone (drag & drop, file picker)              │
//! │  SignedOut ("/login")                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer, ToastStack                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and server URL resolution
//! - [`types`] - Common types (AppError, Toast, etc.)
//! - [`dropzone`] - Dropzone state machine and upload contract
//! - [`components`] - UI components (Header, UploadDropzone, etc.)
//! - [`services`] - Backend communication (upload, auth)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod dropzone;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Notifications
    Toast, ToastLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                    <Route path=LOGIN_PATH view=SignedOut/>
                </Routes>
            </main>
        </Router>
        <ToastStack/>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (uploaded_count, set_uploaded_count) = create_signal(0usize);
    let server_url = get_server_url();

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadDropzone
                upload_file=move |file: web_sys::File| upload_file(file, server_url.clone())
                on_client_upload_complete=move || set_uploaded_count.update(|n| *n += 1)
                on_upload_error=move |e: AppError| log::warn!("Upload rejected: {}", e)
            />

            <Show
                when=move || { uploaded_count.get() > 0 }
                fallback=|| view! { }
            >
                <p class="upload-count">
                    {move || format!("{} file(s) uploaded this session", uploaded_count.get())}
                </p>
            </Show>
        </div>

        <Footer/>
    }
}
