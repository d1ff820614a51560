//! Build-time configuration for the browser client.
//!
//! Values are baked in with `option_env!` when the WASM bundle is compiled,
//! the same way a bundler inlines its environment. Blank values fall back to
//! defaults so a bare `cargo leptos build` still produces a working bundle
//! against a local Asynqmon server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use login::LoginConfig;
use serde::Serialize;

/// Port the Asynqmon server listens on in local setups.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9090";

/// Name of the Firebase app instance owned by the login page.
pub const FIREBASE_APP_NAME: &str = "asynqmon-login";

/// Login flow configuration from `ASYNQMON_API_BASE_URL`.
pub fn login_config() -> LoginConfig {
    LoginConfig::new(resolve_base_url(option_env!("ASYNQMON_API_BASE_URL")))
}

/// Firebase web app configuration from the `FIREBASE_*` build variables.
pub fn firebase_config() -> FirebaseConfig {
    FirebaseConfig::from_parts(
        option_env!("FIREBASE_API_KEY"),
        option_env!("FIREBASE_AUTH_DOMAIN"),
        option_env!("FIREBASE_PROJECT_ID"),
        option_env!("FIREBASE_APP_ID"),
    )
}

fn resolve_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

/// Subset of the Firebase web config the auth SDK needs.
///
/// Serialized with the SDK's camelCase keys and handed to `initializeApp`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
}

impl FirebaseConfig {
    fn from_parts(
        api_key: Option<&str>,
        auth_domain: Option<&str>,
        project_id: Option<&str>,
        app_id: Option<&str>,
    ) -> Self {
        let owned = |v: Option<&str>| v.map(str::trim).unwrap_or_default().to_owned();
        Self {
            api_key: owned(api_key),
            auth_domain: owned(auth_domain),
            project_id: owned(project_id),
            app_id: owned(app_id),
        }
    }

    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("FIREBASE_API_KEY", &self.api_key),
            ("FIREBASE_AUTH_DOMAIN", &self.auth_domain),
            ("FIREBASE_PROJECT_ID", &self.project_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
