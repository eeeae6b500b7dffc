//! Admin dashboard page, mounted behind the router's auth guard.
//!
//! The dashboard call is the one place the raw session token travels
//! in an explicit `Authorization` header; the backend rejects
//! non-admin users with 403, which renders as a scoped error here.

use crate::api::TeaRateApi;
use crate::auth::use_auth;
use crate::web::router::use_navigate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tearate_shared::protocol::SummaryRow;

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<TeaRateApi>();
    let navigate = use_navigate();

    let (summary, set_summary) = signal(Vec::<SummaryRow>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let api = api.clone();
        move |_| {
            let Some(token) = ctx.state.get().token else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                // The dashboard endpoint is the authorization gate;
                // the summary supplies the numbers it will grow into.
                let authorized = api.get_dashboard(&token).await;
                match authorized {
                    Ok(_) => match api.get_summary().await {
                        Ok(rows) => {
                            set_summary.set(rows);
                            set_error_msg.set(None);
                        }
                        Err(e) => set_error_msg.set(Some(e)),
                    },
                    Err(e) => set_error_msg.set(Some(e)),
                }
                set_loading.set(false);
            });
        }
    });

    let is_empty = move || summary.with(|s| s.is_empty());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <a class="btn btn-ghost text-xl">"Tea Rater Admin"</a>
                    </div>
                    <div class="flex-none">
                        <button class="btn btn-ghost" on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/")
                        }>
                            "Back to Ratings"
                        </button>
                    </div>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap()}</span>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="p-6 pb-2">
                            <h3 class="card-title">"Average Scores by Tea"</h3>
                        </div>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Tea"</th>
                                        <th>"Overall"</th>
                                        <th>"Umami"</th>
                                        <th>"Astringency"</th>
                                        <th>"Floral"</th>
                                        <th>"Vegetal"</th>
                                        <th>"Nutty"</th>
                                        <th>"Roasted"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || loading.get() && is_empty()>
                                        <tr>
                                            <td colspan="8" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || !loading.get() && is_empty() && error_msg.get().is_none()>
                                        <tr>
                                            <td colspan="8" class="text-center py-8 text-base-content/50">
                                                "No ratings yet."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || summary.get()
                                        key=|row| row.tea_name.clone()
                                        children=move |row| {
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{row.tea_name.clone()}</td>
                                                    <td>{format!("{:.1}", row.avg_rating)}</td>
                                                    <td>{format!("{:.1}", row.avg_umami)}</td>
                                                    <td>{format!("{:.1}", row.avg_astringency)}</td>
                                                    <td>{format!("{:.1}", row.avg_floral)}</td>
                                                    <td>{format!("{:.1}", row.avg_vegetal)}</td>
                                                    <td>{format!("{:.1}", row.avg_nutty)}</td>
                                                    <td>{format!("{:.1}", row.avg_roasted)}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
