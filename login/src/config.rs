//! Explicit configuration handed to [`crate::LoginFlow`] at construction.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_REDIRECT_PATH: &str = "/monitoring";
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginConfig {
    /// Host the `/login` POST goes to. Empty means same origin.
    pub backend_base_url: String,
    /// Path appended to the page origin after a successful login.
    pub redirect_path: String,
    pub redirect_delay: Duration,
}

impl LoginConfig {
    pub fn new(backend_base_url: impl Into<String>) -> Self {
        Self {
            backend_base_url: backend_base_url.into(),
            redirect_path: DEFAULT_REDIRECT_PATH.to_owned(),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }

    /// Full URL of the backend login endpoint.
    #[must_use]
    pub fn login_endpoint(&self) -> String {
        format!("{}/login", self.backend_base_url.trim().trim_end_matches('/'))
    }

    /// Where the browser goes after a successful login, given the page origin.
    #[must_use]
    pub fn redirect_target(&self, origin: &str) -> String {
        let path = self.redirect_path.trim_start_matches('/');
        format!("{}/{path}", origin.trim_end_matches('/'))
    }
}
