//! Tea registration: a collapsible form for adding a tea to the
//! catalog. Both fields are required locally before any request.

use crate::api::TeaRateApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterTea(
    /// Fired after a successful registration so the parent can
    /// refresh the tea catalog.
    #[prop(into)]
    on_registered: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<TeaRateApi>();

    let (open, set_open) = signal(false);
    let (tea_name, set_tea_name) = signal(String::new());
    let (provider, set_provider) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (banner, set_banner) = signal(Option::<(String, bool)>::None);

    Effect::new(move |_| {
        if banner.get().is_some() {
            set_timeout(
                move || set_banner.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let name = tea_name.get().trim().to_string();
            let from = provider.get().trim().to_string();
            if name.is_empty() || from.is_empty() {
                set_banner.set(Some(("Please fill in all fields".to_string(), true)));
                return;
            }

            set_is_submitting.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.register_tea(&name, &from).await {
                    Ok(()) => {
                        set_banner.set(Some(("Tea registered successfully!".to_string(), false)));
                        set_tea_name.set(String::new());
                        set_provider.set(String::new());
                        on_registered.run(());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("registering tea: {}", e).into());
                        set_banner.set(Some((format!("Failed to register tea: {}", e), true)));
                    }
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <div>
            <button
                class="btn btn-success btn-sm"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "Hide Tea Registration" } else { "Register New Tea" }}
            </button>

            <Show when=move || open.get()>
                <div class="card bg-base-100 shadow-xl mt-4">
                    <form class="card-body" on:submit=on_submit.clone()>
                        <Show when=move || banner.get().is_some()>
                            <div class=move || {
                                let (_, is_err) = banner.get().unwrap();
                                if is_err { "alert alert-error text-sm py-2" } else { "alert alert-success text-sm py-2" }
                            }>
                                <span>{move || banner.get().unwrap().0}</span>
                            </div>
                        </Show>

                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label for="tea_name" class="label">
                                    <span class="label-text">"Tea Name"</span>
                                </label>
                                <input
                                    id="tea_name"
                                    type="text"
                                    placeholder="Dragonwell"
                                    on:input=move |ev| set_tea_name.set(event_target_value(&ev))
                                    prop:value=tea_name
                                    class="input input-bordered w-full"
                                />
                            </div>
                            <div class="form-control">
                                <label for="provider" class="label">
                                    <span class="label-text">"Provider"</span>
                                </label>
                                <input
                                    id="provider"
                                    type="text"
                                    placeholder="Clovis"
                                    on:input=move |ev| set_provider.set(event_target_value(&ev))
                                    prop:value=provider
                                    class="input input-bordered w-full"
                                />
                            </div>
                        </div>

                        <div class="card-actions justify-end">
                            <button type="submit" disabled=move || is_submitting.get() class="btn btn-primary">
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Registering..." }.into_any()
                                } else {
                                    "Register Tea".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
