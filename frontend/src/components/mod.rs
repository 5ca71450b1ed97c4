//! UI Components for the Filedrop application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the logout button
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadDropzone`] - Single file upload with drag & drop
//! - [`LogoutButton`] - Ends the session and leaves for the login route
//! - [`ToastStack`] - Transient notifications (see [`Toaster`])
//! - [`SignedOut`] - Page shown after logout

mod header;
mod hero;
mod footer;
mod upload_dropzone;
mod logout;
mod toast;
mod signed_out;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use upload_dropzone::*;
pub use logout::*;
pub use toast::*;
pub use signed_out::*;
