//! Login page with the Google popup sign-in button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `BrowserLoginFlow` for as long as it is mounted. Every
//! click starts an independent attempt; there is no in-flight guard. When the
//! page is torn down the flow's pending redirect is cancelled, so a success
//! toast never navigates away from a view that is already gone.

use leptos::prelude::*;

use crate::components::google_icon::GoogleIcon;

const LOGO_URL: &str =
    "https://ec3q29jlfx8dke21.public.blob.vercel-storage.com/demi-masa-logo-hqkMxwY4lciC0StHA05IUeeWvw3jfq.png";

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let flow = {
        use std::rc::Rc;

        let toasts = expect_context::<RwSignal<crate::state::toast::ToastState>>();
        let flow = StoredValue::new_local(Rc::new(crate::util::browser::browser_login_flow(toasts)));
        on_cleanup(move || {
            if flow.try_with_value(|flow| flow.cancel_pending_redirect()) == Some(true) {
                log::info!("login page unmounted; pending redirect cancelled");
            }
        });
        flow
    };

    let on_login = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let flow = flow.get_value();
            leptos::task::spawn_local(async move {
                let outcome = flow.attempt_login().await;
                log::debug!("login attempt finished: {outcome:?}");
            });
        }
    };

    view! {
        <main class="login-page">
            <section class="login-card">
                <header class="login-card__header">
                    <h1 class="login-card__title">"Welcome back"</h1>
                    <p class="login-card__subtitle">"Login to access Asynqmon"</p>
                </header>

                <div class="login-card__content">
                    <div class="login-card__logo">
                        <img src=LOGO_URL alt="Demi Masa Logo" width="300" height="100"/>
                    </div>

                    <button class="login-button" type="button" on:click=on_login>
                        <span class="login-button__icon">
                            <GoogleIcon/>
                        </span>
                        <span class="login-button__label">"Login dengan Google"</span>
                    </button>
                </div>
            </section>
        </main>
    }
}
