//! One login attempt, from provider popup to toast and redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login button calls [`LoginFlow::attempt_login`] once per click. The
//! attempt suspends twice (provider popup, HTTP exchange) and always ends in
//! either a notification or a notification plus a scheduled redirect.
//!
//! ERROR HANDLING
//! ==============
//! 401, 403 and 5xx get a specific message where they are detected. Provider
//! failures, transport failures, 400 and unmapped statuses all surface as
//! [`LoginError`] and share one catch-all: log the full cause chain, show
//! [`FALLBACK_MESSAGE`]. The specific reason only appears in the log.
//!
//! [`FALLBACK_MESSAGE`]: crate::outcome::FALLBACK_MESSAGE

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::cell::RefCell;

use crate::config::LoginConfig;
use crate::error::{LoginError, error_chain};
use crate::outcome::LoginOutcome;
use crate::ports::{AuthBackend, IdentityProvider, LoginRequest, Navigator, Notifier, Scheduler};

pub struct LoginFlow<P, B, N, V, S>
where
    S: Scheduler,
{
    config: LoginConfig,
    provider: P,
    backend: B,
    notifier: N,
    navigator: V,
    scheduler: S,
    /// Redirect scheduled by the latest successful attempt.
    pending_redirect: RefCell<Option<S::Handle>>,
}

impl<P, B, N, V, S> LoginFlow<P, B, N, V, S>
where
    P: IdentityProvider,
    B: AuthBackend,
    N: Notifier,
    V: Navigator,
    S: Scheduler,
{
    pub fn new(config: LoginConfig, provider: P, backend: B, notifier: N, navigator: V, scheduler: S) -> Self {
        Self { config, provider, backend, notifier, navigator, scheduler, pending_redirect: RefCell::new(None) }
    }

    #[must_use]
    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    /// Run one attempt. Never fails; every path notifies the user.
    pub async fn attempt_login(&self) -> LoginOutcome {
        match self.try_login().await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("login attempt failed (kind={}): {}", err.kind(), error_chain(&err));
                let outcome = err.outcome();
                self.notifier.notify(outcome.notice());
                outcome
            }
        }
    }

    /// Cancel a scheduled redirect. Returns `true` if one was pending.
    pub fn cancel_pending_redirect(&self) -> bool {
        self.pending_redirect.borrow_mut().take().is_some()
    }

    async fn try_login(&self) -> Result<LoginOutcome, LoginError> {
        let identity = self.provider.sign_in().await?;
        let request = LoginRequest::from(identity);
        let endpoint = self.config.login_endpoint();
        let status = self.backend.login(&endpoint, &request).await?;
        // The token does not outlive the exchange.
        drop(request);

        let outcome = LoginOutcome::from_status(status);
        match outcome {
            LoginOutcome::Success => {
                log::info!("login accepted");
                self.notifier.notify(outcome.notice());
                self.schedule_redirect();
                Ok(outcome)
            }
            LoginOutcome::InvalidToken | LoginOutcome::Unauthorized | LoginOutcome::ServerError => {
                log::warn!("login rejected with status {status}");
                self.notifier.notify(outcome.notice());
                Ok(outcome)
            }
            LoginOutcome::InvalidRequest => Err(LoginError::InvalidRequest),
            LoginOutcome::UnknownStatus(_) | LoginOutcome::ProviderOrNetworkFailure => {
                Err(LoginError::UnknownStatus(status))
            }
        }
    }

    fn schedule_redirect(&self) {
        let navigator = self.navigator.clone();
        let target = self.config.redirect_target(&navigator.origin());
        let task = Box::new(move || {
            log::info!("redirecting to {target}");
            navigator.replace(&target);
        });
        let handle = self.scheduler.schedule(self.config.redirect_delay, task);
        // Replacing drops, and so cancels, an older pending redirect.
        self.pending_redirect.replace(Some(handle));
    }
}
