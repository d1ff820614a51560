//! Errors raised during a login attempt.
//!
//! Only the variants of [`LoginError`] reach the catch-all handler in
//! [`crate::flow`]. Authorization rejections and 5xx responses are not errors
//! here; they are outcomes with their own notices.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::error::Error;
use std::fmt::Write as _;

use crate::outcome::LoginOutcome;

/// Failure of the interactive identity-provider sign-in.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("sign-in popup was closed before completing")]
    Cancelled,
    #[error("sign-in popup was blocked by the browser")]
    PopupBlocked,
    #[error("network error during sign-in: {0}")]
    Network(String),
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
    #[error("identity provider error {code}: {message}")]
    Failed { code: String, message: String },
}

/// Network-level failure reaching the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("identity provider sign-in failed")]
    Interaction(#[from] ProviderError),
    #[error("login request failed")]
    Transport(#[from] TransportError),
    #[error("invalid request body")]
    InvalidRequest,
    #[error("unexpected login response status {0}")]
    UnknownStatus(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Interaction,
    Transport,
    /// Client and backend disagree about the `/login` contract.
    Protocol,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Interaction => "interaction",
            Self::Transport => "transport",
            Self::Protocol => "protocol",
        })
    }
}

impl LoginError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Interaction(_) => FailureKind::Interaction,
            Self::Transport(_) => FailureKind::Transport,
            Self::InvalidRequest | Self::UnknownStatus(_) => FailureKind::Protocol,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> LoginOutcome {
        match self {
            Self::Interaction(_) | Self::Transport(_) => LoginOutcome::ProviderOrNetworkFailure,
            Self::InvalidRequest => LoginOutcome::InvalidRequest,
            Self::UnknownStatus(status) => LoginOutcome::UnknownStatus(*status),
        }
    }
}

/// Render an error followed by every `source()` below it, joined by `: `.
#[must_use]
pub fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        // Writing to a String cannot fail.
        if write!(out, ": {cause}").is_err() {
            break;
        }
        source = cause.source();
    }
    out
}
