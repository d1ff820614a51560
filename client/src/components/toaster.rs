//! Toast stack rendered above every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `RwSignal<ToastState>` provided by `App`. The login flow writes
//! into the same signal through `ToastNotifier`.

use leptos::prelude::*;

use crate::state::toast::{ToastState, level_class};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li class=level_class(toast.level) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|state| {
                                        state.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
