//! Collaborators the login flow depends on.
//!
//! DESIGN
//! ======
//! The browser client implements these with Firebase, `gloo-net`, the toast
//! store, `window.location` and `gloo-timers`; the CLI with `reqwest` and
//! tokio; tests with in-memory fakes. All of it is single-threaded, so the
//! async traits are `?Send`.

#[cfg(test)]
#[path = "ports_test.rs"]
mod ports_test;

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{ProviderError, TransportError};
use crate::outcome::Notice;

/// What the identity provider yields after an interactive sign-in.
pub struct Identity {
    /// Short-lived, force-refreshed identity token.
    pub id_token: String,
    /// Account email, empty when the provider has none.
    pub email: String,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("id_token", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

/// JSON body of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    id_token: String,
    email: String,
}

impl LoginRequest {
    #[must_use]
    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<Identity> for LoginRequest {
    fn from(identity: Identity) -> Self {
        Self { id_token: identity.id_token, email: identity.email }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("id_token", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Run the interactive sign-in and return a freshly issued token.
    async fn sign_in(&self) -> Result<Identity, ProviderError>;
}

#[async_trait(?Send)]
pub trait AuthBackend {
    /// POST `request` as JSON to `endpoint` and return the response status.
    /// The response body is ignored.
    async fn login(&self, endpoint: &str, request: &LoginRequest) -> Result<u16, TransportError>;
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Page navigation. Cloned into the scheduled redirect task.
pub trait Navigator: Clone + 'static {
    /// Origin of the current page, e.g. `https://asynqmon.example.com`.
    fn origin(&self) -> String;
    /// Replace the current page with `url`.
    fn replace(&self, url: &str);
}

/// One-shot delayed tasks.
pub trait Scheduler {
    /// Dropping the handle cancels the task if it has not run yet.
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}
