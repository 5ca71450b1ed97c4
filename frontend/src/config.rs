//! Application configuration.
//!
//! Centralized configuration for the Filedrop frontend.
//! Constants are hardcoded; the server URL is derived from the deployment
//! environment captured when the WASM bundle is built.

/// Application name, used for the page title.
pub const APP_NAME: &str = "Filedrop";

/// Server URL used when building in development mode.
pub const DEV_SERVER_URL: &str = "http://localhost:3000";

/// Upload endpoint, relative to the server URL.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Session termination endpoint, relative to the server URL.
pub const SIGN_OUT_PATH: &str = "/api/auth/sign-out";

/// Route the user lands on after logging out.
pub const LOGIN_PATH: &str = "/login";

/// Maximum file size for upload (in bytes).
///
/// 50 MB limit.
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Deployment environment relevant to URL resolution.
///
/// A WASM bundle has no process environment at runtime, so the values are
/// captured at build time by [`ServerEnv::from_build_env`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerEnv {
    /// `NODE_ENV`
    pub node_env: Option<String>,
    /// `VERCEL_ENV`
    pub vercel_env: Option<String>,
    /// `VERCEL_PROJECT_PRODUCTION_URL`
    pub production_url: Option<String>,
    /// `VERCEL_URL`
    pub deployment_url: Option<String>,
}

impl ServerEnv {
    /// Capture the environment the bundle was built with.
    pub fn from_build_env() -> Self {
        Self {
            node_env: option_env!("NODE_ENV").map(str::to_owned),
            vercel_env: option_env!("VERCEL_ENV").map(str::to_owned),
            production_url: option_env!("VERCEL_PROJECT_PRODUCTION_URL").map(str::to_owned),
            deployment_url: option_env!("VERCEL_URL").map(str::to_owned),
        }
    }

    /// Resolve the active server URL.
    ///
    /// Development always points at the local server. Otherwise a production
    /// deployment uses its production URL and every other deployment its own
    /// URL. Missing values are returned as `None`, not replaced.
    pub fn server_url(&self) -> Option<String> {
        if self.node_env.as_deref() == Some("development") {
            return Some(DEV_SERVER_URL.to_string());
        }

        if self.vercel_env.as_deref() == Some("production") {
            return self.production_url.clone();
        }

        self.deployment_url.clone()
    }
}

/// Server URL for the current build.
pub fn get_server_url() -> Option<String> {
    ServerEnv::from_build_env().server_url()
}

/// Join an API path onto the server URL.
///
/// Without a server URL the path is kept relative, so requests go to the
/// origin serving the page.
pub fn api_url(server_url: Option<&str>, path: &str) -> String {
    match server_url {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
        None => path.to_string(),
    }
}
