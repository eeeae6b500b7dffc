//! Page composition.
//!
//! The home page branches solely on the session token: no token (or a
//! malformed one) shows the login form, otherwise the authenticated
//! view. The authenticated view owns the state the children
//! coordinate through: the edit target and the refresh counters.

use crate::auth::use_auth;
use leptos::prelude::*;
use super::login::LoginForm;
use super::{Navbar, RatingForm, RatingsList, RegisterTea};
use tearate_shared::RatedTea;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_auth();
    let user_id = Memo::new(move |_| ctx.state.get().user_id());

    move || match user_id.get() {
        None => view! { <LoginForm /> }.into_any(),
        Some(id) => view! { <AuthenticatedHome user_id=id /> }.into_any(),
    }
}

#[component]
fn AuthenticatedHome(user_id: u32) -> impl IntoView {
    // Rating being edited, with its tea name; None means the form is
    // in create mode.
    let edit_target = RwSignal::new(Option::<RatedTea>::None);
    // Monotonic counters; bumping one re-runs the dependent fetch.
    let ratings_refresh = RwSignal::new(0u64);
    let catalog_refresh = RwSignal::new(0u64);

    let on_saved = Callback::new(move |_: ()| {
        edit_target.set(None);
        ratings_refresh.update(|n| *n += 1);
        // Rated teas drop out of the create-mode catalog.
        catalog_refresh.update(|n| *n += 1);
    });

    let on_edit = Callback::new(move |entry: RatedTea| {
        edit_target.set(Some(entry));
    });

    let on_tea_registered = Callback::new(move |_: ()| {
        catalog_refresh.update(|n| *n += 1);
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-6">
                <Navbar user_id=user_id />
                <RegisterTea on_registered=on_tea_registered />
                <RatingForm
                    user_id=user_id
                    edit_target=edit_target
                    on_saved=on_saved
                    catalog_refresh=catalog_refresh
                />
                <RatingsList
                    user_id=user_id
                    refresh=ratings_refresh
                    on_edit=on_edit
                />
            </div>
        </div>
    }
}
