//! Tea Rater frontend.
//!
//! Context-driven layout:
//! - `auth`: session state, the single owner of the token
//! - `api`: REST client for the backend
//! - `web`: wrappers over the native browser APIs (fetch, storage,
//!   History routing)
//! - `components`: UI layer

pub mod api;
mod auth;
mod components {
    pub mod admin;
    pub mod home;
    pub mod login;
    mod navbar;
    mod rating_form;
    mod ratings_list;
    mod register_tea;

    pub(crate) use navbar::Navbar;
    pub(crate) use rating_form::RatingForm;
    pub(crate) use ratings_list::RatingsList;
    pub(crate) use register_tea::RegisterTea;
}
pub(crate) mod web;

use crate::api::TeaRateApi;
use crate::auth::{AuthContext, init_auth};
use crate::components::admin::AdminPage;
use crate::components::home::HomePage;

use leptos::prelude::*;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Map a route to its view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Session context, loaded from LocalStorage before anything renders.
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // One API client for the whole tree.
    provide_context(TeaRateApi::default());

    // The router only sees a boolean; it stays decoupled from the
    // session module.
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
