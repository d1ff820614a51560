//! Status table for the backend `/login` response.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

pub const SUCCESS_MESSAGE: &str = "Login successful, redirecting to Asynqmon";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid id token";
pub const UNAUTHORIZED_MESSAGE: &str = "You are not authorized to login using this email";
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong";
pub const FALLBACK_MESSAGE: &str = "Failed to login with Google account";

/// Classified result of one login attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    InvalidRequest,
    InvalidToken,
    Unauthorized,
    ServerError,
    /// A status the client has no mapping for; carries the literal code.
    UnknownStatus(u16),
    ProviderOrNetworkFailure,
}

impl LoginOutcome {
    /// Map a backend response status. First match wins, in table order.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Self::Success,
            400 => Self::InvalidRequest,
            401 => Self::InvalidToken,
            403 => Self::Unauthorized,
            s if s >= 500 => Self::ServerError,
            s => Self::UnknownStatus(s),
        }
    }

    /// Notification the user sees for this outcome.
    ///
    /// Outcomes that travel through the catch-all handler all share
    /// [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn notice(self) -> Notice {
        match self {
            Self::Success => Notice::success(SUCCESS_MESSAGE),
            Self::InvalidToken => Notice::error(INVALID_TOKEN_MESSAGE),
            Self::Unauthorized => Notice::error(UNAUTHORIZED_MESSAGE),
            Self::ServerError => Notice::error(SERVER_ERROR_MESSAGE),
            Self::InvalidRequest | Self::UnknownStatus(_) | Self::ProviderOrNetworkFailure => {
                Notice::error(FALLBACK_MESSAGE)
            }
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message for the notification sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}
