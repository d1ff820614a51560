//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{login::LoginPage, not_found::NotFoundPage};
use crate::state::toast::ToastState;

/// Firebase compat builds expose the `firebase` global the identity
/// provider binds to.
const FIREBASE_APP_SCRIPT: &str = "https://www.gstatic.com/firebasejs/10.12.2/firebase-app-compat.js";
const FIREBASE_AUTH_SCRIPT: &str = "https://www.gstatic.com/firebasejs/10.12.2/firebase-auth-compat.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=FIREBASE_APP_SCRIPT></script>
                <script src=FIREBASE_AUTH_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast store and sets up client-side routing: `/` and `/login`
/// render the login page, everything else the not-found page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/asynqmon-login.css"/>
        <Title text="Asynqmon Login"/>

        <Toaster/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
