//! Login / registration form.
//!
//! Collects a username and toggles between the two intents. On
//! success the session module adopts the issued token and the page
//! composition switches to the authenticated view on its own.

use crate::api::TeaRateApi;
use crate::auth::{login, register, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq)]
enum Intent {
    Login,
    Register,
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<TeaRateApi>();

    let (username, set_username) = signal(String::new());
    let (intent, set_intent) = signal(Intent::Login);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get().trim().to_string();
        if name.is_empty() {
            set_error_msg.set(Some("Please enter a username".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let result = match intent.get_untracked() {
                Intent::Login => login(&ctx, &api, name).await,
                Intent::Register => register(&ctx, &api, name).await,
            };
            if let Err(e) = result {
                set_error_msg.set(Some(e));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Tea Rater"</h1>
                    <p class="text-base-content/70">
                        {move || match intent.get() {
                            Intent::Login => "Enter your username to continue",
                            Intent::Register => "Pick a username to get started",
                        }}
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="Enter username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Working..." }.into_any()
                                } else {
                                    match intent.get() {
                                        Intent::Login => "Login".into_any(),
                                        Intent::Register => "Register".into_any(),
                                    }
                                }}
                            </button>
                        </div>

                        <button
                            type="button"
                            class="btn btn-link btn-sm"
                            on:click=move |_| {
                                set_error_msg.set(None);
                                set_intent.update(|i| {
                                    *i = match *i {
                                        Intent::Login => Intent::Register,
                                        Intent::Register => Intent::Login,
                                    }
                                });
                            }
                        >
                            {move || match intent.get() {
                                Intent::Login => "New here? Register instead",
                                Intent::Register => "Already registered? Login",
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
