//! Top navigation bar: current user's display name plus logout.

use crate::api::TeaRateApi;
use crate::auth::{logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Navbar(user_id: u32) -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<TeaRateApi>();

    let (display_name, set_display_name) = signal(Option::<String>::None);

    // One fetch on mount. A failure only costs the greeting.
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_user(user_id).await {
                    Ok(user) => set_display_name.set(Some(user.name)),
                    Err(e) => {
                        web_sys::console::error_1(&format!("loading user name: {}", e).into());
                    }
                }
            });
        }
    });

    let on_logout = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                logout(&ctx, &api).await;
            });
        }
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <a class="btn btn-ghost text-xl">"Tea Rater"</a>
                <Show when=move || display_name.get().is_some()>
                    <span class="badge badge-neutral hidden md:inline-flex">
                        {move || display_name.get().unwrap()}
                    </span>
                </Show>
            </div>
            <div class="flex-none">
                <button on:click=on_logout class="btn btn-outline btn-error">
                    "Logout"
                </button>
            </div>
        </div>
    }
}
