//! Backend login call.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning a transport error since the endpoint is
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use login::{AuthBackend, LoginRequest, TransportError};

/// POSTs `{id_token, email}` as JSON and reports the status code.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthBackend;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed(endpoint: &str, err: impl std::fmt::Display) -> TransportError {
    TransportError::new(format!("POST {endpoint} failed: {err}"))
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn login(&self, endpoint: &str, request: &LoginRequest) -> Result<u16, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(request)
                .map_err(|e| request_failed(endpoint, e))?
                .send()
                .await
                .map_err(|e| request_failed(endpoint, e))?;
            Ok(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TransportError::new("not available on server"))
        }
    }
}
