//! Toast notifications.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain model provided to components as
//! `RwSignal<ToastState>`. [`ToastNotifier`] is the login flow's notification
//! sink: it pushes into that signal and, in the browser, schedules the
//! auto-dismiss.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use login::{Notice, NoticeLevel, Notifier};

/// Most toasts visible at once; older ones are dropped first.
pub const MAX_VISIBLE: usize = 3;

/// How long a toast stays up before it dismisses itself.
#[cfg(feature = "hydrate")]
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Add a toast and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, level: notice.level, message: notice.message });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

/// CSS modifier class for a toast level.
pub fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
    }
}

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn notify(&self, notice: Notice) {
        let Some(id) = self.toasts.try_update(|state| state.push(notice)) else {
            log::warn!("toast store disposed; notification dropped");
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
                toasts.try_update(|state| state.dismiss(id));
            })
            .forget();
        }
    }
}
