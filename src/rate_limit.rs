//! In-memory per-IP rate limiting for the host server.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`,
//! one window per client IP (default 100 requests/minute). The client IP is
//! taken from `X-Real-IP`, then the first `X-Forwarded-For` hop, then the
//! socket peer address.
//!
//! TRADE-OFFS
//! ==========
//! State is per process and lost on restart. Idle IPs are swept only when the
//! map grows past `SWEEP_THRESHOLD`, and at most once per window, so memory is
//! bounded by recent traffic without a background task and a map full of live
//! clients does not cost a full scan on every request.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

use std::collections::{HashMap, VecDeque};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::config::RateLimitConfig;

const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("rate limit exceeded (max {limit} requests/{window_secs}s)")]
    Exceeded { limit: usize, window_secs: u64, retry_after: Duration },
}

#[derive(Default)]
struct Windows {
    by_ip: HashMap<IpAddr, VecDeque<Instant>>,
    last_sweep: Option<Instant>,
}

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<Windows>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(Windows::default())), config }
    }

    /// Check the client's window, then record the request.
    pub fn check_and_record(&self, ip: IpAddr) -> Result<(), RateLimitError> {
        self.check_and_record_at(ip, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, ip: IpAddr, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let cfg = self.config;

        let sweep_due = inner.last_sweep.is_none_or(|last| now.duration_since(last) >= cfg.window);
        if inner.by_ip.len() > SWEEP_THRESHOLD && sweep_due {
            inner.by_ip.retain(|_, deque| {
                prune_window(deque, now, cfg.window);
                !deque.is_empty()
            });
            inner.last_sweep = Some(now);
        }

        let deque = inner.by_ip.entry(ip).or_default();
        prune_window(deque, now, cfg.window);
        if deque.len() >= cfg.limit {
            let oldest = deque.front().copied().unwrap_or(now);
            let retry_after = cfg.window.saturating_sub(now.duration_since(oldest));
            return Err(RateLimitError::Exceeded {
                limit: cfg.limit,
                window_secs: cfg.window.as_secs(),
                retry_after,
            });
        }
        deque.push_back(now);
        Ok(())
    }
}

#[cfg(test)]
impl RateLimiter {
    fn tracked_clients(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).by_ip.len()
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) >= window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

/// Resolve the client IP the way a proxy-aware server does.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> IpAddr {
    let header_ip = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| v.trim().parse::<IpAddr>().ok())
    };
    header_ip("x-real-ip")
        .or_else(|| header_ip("x-forwarded-for"))
        .or_else(|| peer.map(|addr| addr.ip()))
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Axum middleware: 429 with `Retry-After` once the client's window is full.
pub async fn limit_by_ip(State(limiter): State<RateLimiter>, request: Request, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let ip = client_ip(request.headers(), peer);

    match limiter.check_and_record(ip) {
        Ok(()) => next.run(request).await,
        Err(err @ RateLimitError::Exceeded { retry_after, .. }) => {
            tracing::warn!(%ip, error = %err, "request rate limited");
            // Round up so clients never retry inside the window.
            let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            let mut response = (StatusCode::TOO_MANY_REQUESTS, err.to_string()).into_response();
            response.headers_mut().insert(header::RETRY_AFTER, HeaderValue::from(secs));
            response
        }
    }
}
