//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server only delivers the login screen: the Leptos SSR routes,
//! the WASM/CSS bundle under `/pkg`, and a `/ping` heartbeat. The `/login`
//! POST and `/monitoring` live on the Asynqmon server the client is
//! configured to talk to. Unknown paths fall through to the app shell, whose
//! router renders the not-found page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use leptos::config::errors::LeptosConfigError;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::rate_limit::{RateLimiter, limit_by_ip};

/// Routes that need no Leptos configuration.
fn base_routes() -> Router {
    Router::new().route("/ping", get(ping))
}

/// Heartbeat for load balancers and the CLI probe.
async fn ping() -> &'static str {
    "."
}

/// Apply the shared middleware stack. The rate limit sits inside tracing so
/// rejected requests are still traced.
fn with_layers(router: Router, limiter: RateLimiter) -> Router {
    router
        .layer(middleware::from_fn_with_state(limiter, limit_by_ip))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(#[from] LeptosConfigError),
}

/// Full host app: heartbeat + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(limiter: RateLimiter) -> Result<Router, AppError> {
    let conf = get_configuration(None)?;
    Ok(app_with_options(limiter, conf.leptos_options))
}

fn app_with_options(limiter: RateLimiter, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = base_routes()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router);
    with_layers(router, limiter)
}
