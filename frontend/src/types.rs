//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Notification Types** - Toasts shown to the user
//! - **Error Types** - Frontend error handling

use thiserror::Error;

// =============================================================================
// Notification Types
// =============================================================================

/// Toast severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Operation completed
    Success,
    /// Operation failed
    Error,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✅",
            ToastLevel::Error => "❌",
        }
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used for dismissal
    pub id: u64,
    /// Severity level
    pub level: ToastLevel,
    /// Message shown to the user
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// File upload failed.
    #[error("Upload error: {0}")]
    Upload(String),

    /// Session termination failed.
    #[error("Auth error: {0}")]
    Auth(String),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
