//! Fallback page for unmatched routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Unmatched paths answer 404.
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <main class="login-page">
            <section class="login-card login-card--not-found">
                <h1 class="login-card__title">"404"</h1>
                <p class="login-card__subtitle">"Page not found."</p>
                <a href="/" class="login-link">"Back to login"</a>
            </section>
        </main>
    }
}
