//! Browser implementations of the login flow's navigation and timer ports,
//! plus the assembly of the flow the login page runs.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::RwSignal;
use login::{LoginFlow, Navigator, Scheduler};

use crate::config::{firebase_config, login_config};
use crate::net::api::HttpAuthBackend;
use crate::net::firebase::FirebaseIdentityProvider;
use crate::state::toast::{ToastNotifier, ToastState};

/// Login flow wired to Firebase, `gloo-net`, the toaster and `window`.
pub type BrowserLoginFlow =
    LoginFlow<FirebaseIdentityProvider, HttpAuthBackend, ToastNotifier, BrowserNavigator, TimeoutScheduler>;

/// Build the flow for one mounted login page.
pub fn browser_login_flow(toasts: RwSignal<ToastState>) -> BrowserLoginFlow {
    LoginFlow::new(
        login_config(),
        FirebaseIdentityProvider::new(firebase_config()),
        HttpAuthBackend,
        ToastNotifier::new(toasts),
        BrowserNavigator,
        TimeoutScheduler,
    )
}

/// `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn origin(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        match window.location().origin() {
            Ok(origin) => origin,
            Err(e) => {
                log::warn!("location.origin unavailable: {e:?}");
                String::new()
            }
        }
    }

    fn replace(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("no window to navigate to {url}");
            return;
        };
        if let Err(e) = window.location().replace(url) {
            log::error!("location.replace({url}) failed: {e:?}");
        }
    }
}

/// `setTimeout`; the returned [`Timeout`] clears it when dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}
