//! The user's rating history, rendered as a table.
//!
//! Re-fetches when the parent bumps the refresh counter (after each
//! successful submission). An empty history is an explicit empty
//! state, not an error.

use crate::api::TeaRateApi;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tearate_shared::RatedTea;

#[component]
pub fn RatingsList(
    user_id: u32,
    /// Bumped by the parent to trigger a re-fetch.
    #[prop(into)]
    refresh: Signal<u64>,
    /// Fired with the chosen row, tea name included, when the user
    /// clicks edit.
    #[prop(into)]
    on_edit: Callback<RatedTea>,
) -> impl IntoView {
    let api = expect_context::<TeaRateApi>();

    let (ratings, set_ratings) = signal(Vec::<RatedTea>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // Responses racing each other would let a stale fetch overwrite a
    // newer one; the sequence number drops anything outdated.
    let fetch_seq = StoredValue::new(0u64);
    Effect::new({
        let api = api.clone();
        move |_| {
            refresh.get();
            let seq = fetch_seq.get_value() + 1;
            fetch_seq.set_value(seq);
            set_loading.set(true);

            let api = api.clone();
            spawn_local(async move {
                let result = api.get_user_ratings(user_id).await;
                if fetch_seq.get_value() != seq {
                    return;
                }
                match result {
                    Ok(list) => {
                        set_ratings.set(list);
                        set_error_msg.set(None);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("loading ratings: {}", e).into());
                        set_error_msg.set(Some("Failed to load ratings".to_string()));
                        set_ratings.set(Vec::new());
                    }
                }
                set_loading.set(false);
            });
        }
    });

    let is_empty = move || ratings.with(|r| r.is_empty());

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="p-6 pb-2">
                    <h3 class="card-title">"Your Tea Ratings"</h3>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div class="text-center text-error py-4">
                        {move || error_msg.get().unwrap()}
                    </div>
                </Show>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Tea"</th>
                                <th>"Overall"</th>
                                <th class="hidden md:table-cell">"Umami"</th>
                                <th class="hidden md:table-cell">"Astringency"</th>
                                <th class="hidden md:table-cell">"Floral"</th>
                                <th class="hidden md:table-cell">"Vegetal"</th>
                                <th class="hidden md:table-cell">"Nutty"</th>
                                <th class="hidden md:table-cell">"Roasted"</th>
                                <th class="hidden md:table-cell">"Body"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || is_empty() && !loading.get() && error_msg.get().is_none()>
                                <tr>
                                    <td colspan="10" class="text-center py-8 text-base-content/50">
                                        "You haven't rated any teas yet!"
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || loading.get() && is_empty()>
                                <tr>
                                    <td colspan="10" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span> " Loading..."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || ratings.get()
                                key=|entry| entry.rating.id
                                children=move |entry| {
                                    let target = entry.clone();
                                    view! {
                                        <tr>
                                            <td class="font-bold">{entry.tea_name.clone()}</td>
                                            <td>{entry.rating.rating}</td>
                                            <td class="hidden md:table-cell">{entry.rating.umami}</td>
                                            <td class="hidden md:table-cell">{entry.rating.astringency}</td>
                                            <td class="hidden md:table-cell">{entry.rating.floral}</td>
                                            <td class="hidden md:table-cell">{entry.rating.vegetal}</td>
                                            <td class="hidden md:table-cell">{entry.rating.nutty}</td>
                                            <td class="hidden md:table-cell">{entry.rating.roasted}</td>
                                            <td class="hidden md:table-cell">{entry.rating.body}</td>
                                            <td>
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    on:click=move |_| on_edit.run(target.clone())
                                                >
                                                    "Edit"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
