//! Backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`upload`] - File upload to the server (default dropzone transfer)
//! - [`auth`] - Session termination for the logout button

pub mod upload;
pub mod auth;

pub use upload::*;
pub use auth::*;
