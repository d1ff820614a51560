//! Google popup sign-in through the Firebase compat SDK.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell loads `firebase-app-compat.js` and `firebase-auth-compat.js`,
//! which expose a `firebase` global. This module binds the handful of calls
//! the login page needs: get-or-create a named app, `signInWithPopup` with a
//! `GoogleAuthProvider`, and `getIdToken(true)` on the signed-in user.
//!
//! The provider is constructed by the login page and owned by its flow; the
//! named app is created on first sign-in and reused afterwards.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

use async_trait::async_trait;
use login::{Identity, IdentityProvider, ProviderError};

use crate::config::FirebaseConfig;

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type FirebaseApp;
        pub type FirebaseAuth;
        pub type UserCredential;
        pub type FirebaseUser;

        #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
        pub type GoogleAuthProvider;

        /// `firebase.app(name)`; throws when no app with that name exists.
        #[wasm_bindgen(catch, js_namespace = firebase, js_name = app)]
        pub fn existing_app(name: &str) -> Result<FirebaseApp, JsValue>;

        #[wasm_bindgen(catch, js_namespace = firebase, js_name = initializeApp)]
        pub fn initialize_app(config: &JsValue, name: &str) -> Result<FirebaseApp, JsValue>;

        #[wasm_bindgen(method)]
        pub fn auth(this: &FirebaseApp) -> FirebaseAuth;

        #[wasm_bindgen(constructor, js_namespace = ["firebase", "auth"], js_class = "GoogleAuthProvider")]
        pub fn new() -> GoogleAuthProvider;

        #[wasm_bindgen(method, js_name = signInWithPopup)]
        pub fn sign_in_with_popup(this: &FirebaseAuth, provider: &GoogleAuthProvider) -> js_sys::Promise;

        #[wasm_bindgen(method, getter)]
        pub fn user(this: &UserCredential) -> FirebaseUser;

        #[wasm_bindgen(method, getter)]
        pub fn email(this: &FirebaseUser) -> Option<String>;

        #[wasm_bindgen(method, js_name = getIdToken)]
        pub fn get_id_token(this: &FirebaseUser, force_refresh: bool) -> js_sys::Promise;
    }
}

/// Map a Firebase auth error code onto the provider error taxonomy.
///
/// A missing code means the failure did not come from the auth SDK at all,
/// typically because the `firebase` global never loaded.
#[cfg(any(test, feature = "hydrate"))]
fn classify_error(code: Option<&str>, message: String) -> ProviderError {
    match code {
        None => ProviderError::Unavailable(message),
        Some("auth/popup-closed-by-user" | "auth/cancelled-popup-request" | "auth/user-cancelled") => {
            ProviderError::Cancelled
        }
        Some("auth/popup-blocked") => ProviderError::PopupBlocked,
        Some("auth/network-request-failed") => ProviderError::Network(message),
        Some(code) => ProviderError::Failed { code: code.to_owned(), message },
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ProviderError {
    let field = |name: &str| {
        js_sys::Reflect::get(&err, &wasm_bindgen::JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_string())
    };
    let message = field("message")
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".to_owned());
    classify_error(field("code").as_deref(), message)
}

#[derive(Clone, Debug)]
pub struct FirebaseIdentityProvider {
    config: FirebaseConfig,
}

impl FirebaseIdentityProvider {
    pub fn new(config: FirebaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FirebaseConfig {
        &self.config
    }

    #[cfg(feature = "hydrate")]
    fn app(&self) -> Result<bindings::FirebaseApp, ProviderError> {
        let missing = self.config.missing_fields();
        if !missing.is_empty() {
            return Err(ProviderError::Unavailable(format!("missing {}", missing.join(", "))));
        }
        if let Ok(app) = bindings::existing_app(crate::config::FIREBASE_APP_NAME) {
            return Ok(app);
        }
        let json = serde_json::to_string(&self.config)
            .map_err(|e| ProviderError::Unavailable(format!("firebase config: {e}")))?;
        let config = js_sys::JSON::parse(&json).map_err(js_error)?;
        bindings::initialize_app(&config, crate::config::FIREBASE_APP_NAME).map_err(js_error)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_in(&self) -> Result<Identity, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen_futures::JsFuture;

            let auth = self.app()?.auth();
            let provider = bindings::GoogleAuthProvider::new();
            let credential: bindings::UserCredential = JsFuture::from(auth.sign_in_with_popup(&provider))
                .await
                .map_err(js_error)?
                .unchecked_into();
            let user = credential.user();
            let email = user.email().unwrap_or_default();
            let id_token = JsFuture::from(user.get_id_token(true))
                .await
                .map_err(js_error)?
                .as_string()
                .ok_or_else(|| ProviderError::Failed {
                    code: "auth/invalid-id-token".to_owned(),
                    message: "getIdToken resolved to a non-string".to_owned(),
                })?;
            Ok(Identity { id_token, email })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ProviderError::Unavailable("not available on server".to_owned()))
        }
    }
}
