//! Login flow shared by the browser client and the CLI probe.
//!
//! This crate owns the part of the login screen that is not UI: exchanging an
//! identity token with the Asynqmon backend and turning the response status
//! into a notification and, on success, a delayed redirect. Everything the flow
//! talks to (identity provider, HTTP, toasts, navigation, timers) is a trait in
//! [`ports`], so the same flow runs under WASM and natively.

pub mod config;
pub mod error;
pub mod flow;
pub mod outcome;
pub mod ports;

pub use config::LoginConfig;
pub use error::{FailureKind, LoginError, ProviderError, TransportError, error_chain};
pub use flow::LoginFlow;
pub use outcome::{LoginOutcome, Notice, NoticeLevel};
pub use ports::{AuthBackend, Identity, IdentityProvider, LoginRequest, Navigator, Notifier, Scheduler};
