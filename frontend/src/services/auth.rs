//! Auth client: ends the user's session on the server.

use std::future::Future;

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::{api_url, get_server_url, AppError, AppResult, SIGN_OUT_PATH};

/// Something that can terminate the current session.
pub trait SessionClient {
    fn sign_out(&self) -> impl Future<Output = AppResult<()>>;
}

/// Client for the server's auth endpoints.
#[derive(Debug, Clone, Default)]
pub struct AuthClient {
    server_url: Option<String>,
}

impl AuthClient {
    pub fn new(server_url: Option<String>) -> Self {
        Self { server_url }
    }

    /// Client pointed at the server resolved from the build environment.
    pub fn from_env() -> Self {
        Self::new(get_server_url())
    }

    pub fn sign_out_url(&self) -> String {
        api_url(self.server_url.as_deref(), SIGN_OUT_PATH)
    }
}

impl SessionClient for AuthClient {
    async fn sign_out(&self) -> AppResult<()> {
        // Session cookie must travel with the request
        let response = Request::post(&self.sign_out_url())
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Auth(format!(
                "Sign out rejected ({})",
                response.status()
            )));
        }

        Ok(())
    }
}

/// End the session through `client`.
pub async fn logout<C: SessionClient>(client: &C) -> AppResult<()> {
    log::info!("🔒 Signing out...");

    match client.sign_out().await {
        Ok(()) => {
            log::info!("✅ Signed out");
            Ok(())
        }
        Err(e) => {
            log::error!("❌ Sign out failed: {}", e);
            Err(e)
        }
    }
}
