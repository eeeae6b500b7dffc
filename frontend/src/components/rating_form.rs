//! Rating form: create/edit reconciliation.
//!
//! Creates a new rating, or edits an existing one when an edit target
//! is supplied. The target may arrive after mount (the user clicks
//! "edit" on a list row), so the fields re-sync whenever it changes
//! rather than initializing once.

mod form_state;
mod score_inputs;

use crate::api::TeaRateApi;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tearate_shared::{RatedTea, TEA_UNSELECTED, Tea};

use form_state::FormState;
use score_inputs::ScoreInputs;

#[component]
pub fn RatingForm(
    user_id: u32,
    /// Rating being edited, carried with its tea name so the locked
    /// selector can label it. `None` means create mode.
    #[prop(into)]
    edit_target: Signal<Option<RatedTea>>,
    /// Invoked once per successful submission (create or edit).
    #[prop(into)]
    on_saved: Callback<()>,
    /// Bumped by the parent when the tea catalog should reload.
    #[prop(into)]
    catalog_refresh: Signal<u64>,
) -> impl IntoView {
    let api = expect_context::<TeaRateApi>();
    let state = FormState::new();

    let (teas, set_teas) = signal(Vec::<Tea>::new());
    let (is_submitting, set_is_submitting) = signal(false);
    // Banner: message plus error flag, auto-dismissed below.
    let (banner, set_banner) = signal(Option::<(String, bool)>::None);

    let is_editing = move || edit_target.get().is_some();

    // Catalog load. The backend filters out teas this user already
    // rated (and rejects the call without the filter), so in edit mode
    // the edited tea is absent from the list and the selector shows it
    // from the edit target instead. A stale response, success or
    // failure, is dropped if a newer fetch has been issued since.
    let fetch_seq = StoredValue::new(0u64);
    Effect::new({
        let api = api.clone();
        move |_| {
            catalog_refresh.get();
            let seq = fetch_seq.get_value() + 1;
            fetch_seq.set_value(seq);

            let api = api.clone();
            spawn_local(async move {
                let result = api.get_teas(user_id).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("loading teas: {}", e).into());
                }
                apply_catalog_result(seq, fetch_seq, result, set_teas, set_banner);
            });
        }
    });

    // Re-sync the fields whenever the edit target changes, including
    // when it arrives late. Leaving edit mode returns to a clean draft.
    Effect::new(move |_| match edit_target.get() {
        Some(target) => state.sync_from(&target.rating),
        None => state.reset(),
    });

    // Banners dismiss themselves after a fixed delay.
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

            let editing = edit_target.get_untracked();
            if editing.is_none() && state.tea_id.get_untracked() == TEA_UNSELECTED {
                // Local rejection: no network call happens.
                set_banner.set(Some(("Please select a tea first".to_string(), true)));
                return;
            }

            let rating = state.to_rating(user_id, editing.as_ref().map(|e| &e.rating));
            set_is_submitting.set(true);

            let api = api.clone();
            spawn_local(async move {
                let result = match &editing {
                    Some(original) => api.edit_rating(original.rating.id, &rating).await,
                    None => api.submit_rating(&rating).await,
                };

                match result {
                    Ok(()) => {
                        set_banner.set(Some(("Rating saved".to_string(), false)));
                        if editing.is_some() {
                            // The parent owns exiting edit mode.
                            on_saved.run(());
                        } else {
                            state.reset();
                            on_saved.run(());
                        }
                    }
                    Err(e) => {
                        set_banner.set(Some((format!("Failed to save rating: {}", e), true)));
                    }
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">
                    {move || if is_editing() { "Edit Rating" } else { "Rate a Tea" }}
                </h3>

                <Show when=move || banner.get().is_some()>
                    <div class=move || {
                        let (_, is_err) = banner.get().unwrap();
                        if is_err { "alert alert-error text-sm py-2" } else { "alert alert-success text-sm py-2" }
                    }>
                        <span>{move || banner.get().unwrap().0}</span>
                    </div>
                </Show>

                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Tea"</span>
                        </label>
                        // The tea association is immutable once a rating
                        // exists, so the selector locks in edit mode. The
                        // catalog omits already-rated teas, so the edited
                        // one is labeled from the edit target itself.
                        <select
                            class="select select-bordered w-full"
                            disabled=move || is_editing()
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                                    state.tea_id.set(id);
                                }
                            }
                        >
                            {move || match edit_target.get() {
                                Some(target) => view! {
                                    <option
                                        value=target.rating.tea_id.to_string()
                                        selected=true
                                    >
                                        {target.tea_name.clone()}
                                    </option>
                                }.into_any(),
                                None => view! {
                                    <option
                                        value=TEA_UNSELECTED.to_string()
                                        selected=move || state.tea_id.get() == TEA_UNSELECTED
                                    >
                                        "Select a tea"
                                    </option>
                                    <For
                                        each=move || teas.get()
                                        key=|tea| tea.id
                                        children=move |tea| {
                                            let id = tea.id;
                                            let label = format!("{} - {}", tea.display(), tea.provider);
                                            view! {
                                                <option
                                                    value=id.to_string()
                                                    selected=move || state.tea_id.get() == id
                                                >
                                                    {label}
                                                </option>
                                            }
                                        }
                                    />
                                }.into_any(),
                            }}
                        </select>
                    </div>

                    <ScoreInputs state=state />

                    <div class="card-actions justify-end">
                        <button type="submit" disabled=move || is_submitting.get() class="btn btn-primary">
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                            } else if is_editing() {
                                "Save Changes".into_any()
                            } else {
                                "Submit Rating".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Apply a catalog fetch outcome only if it is still the newest
/// request in flight. A superseded response, success or failure, must
/// touch neither the list nor the banner.
fn apply_catalog_result(
    seq: u64,
    fetch_seq: StoredValue<u64>,
    result: Result<Vec<Tea>, String>,
    set_teas: WriteSignal<Vec<Tea>>,
    set_banner: WriteSignal<Option<(String, bool)>>,
) {
    if fetch_seq.get_value() != seq {
        return;
    }
    match result {
        Ok(list) => set_teas.set(list),
        Err(e) => set_banner.set(Some((format!("Failed to load teas: {}", e), true))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sencha() -> Tea {
        Tea {
            id: 7,
            tea_name: "Sencha".to_string(),
            provider: "Ippodo".to_string(),
            source: None,
        }
    }

    #[test]
    fn current_catalog_outcome_is_applied() {
        let (teas, set_teas) = signal(Vec::<Tea>::new());
        let (banner, set_banner) = signal(Option::<(String, bool)>::None);
        let fetch_seq = StoredValue::new(1u64);

        apply_catalog_result(1, fetch_seq, Ok(vec![sencha()]), set_teas, set_banner);
        assert_eq!(teas.get_untracked(), vec![sencha()]);
        assert!(banner.get_untracked().is_none());

        apply_catalog_result(1, fetch_seq, Err("500".to_string()), set_teas, set_banner);
        let (msg, is_err) = banner.get_untracked().unwrap();
        assert!(msg.contains("500"));
        assert!(is_err);
    }

    #[test]
    fn superseded_catalog_outcomes_are_dropped() {
        let (teas, set_teas) = signal(vec![sencha()]);
        let (banner, set_banner) = signal(Option::<(String, bool)>::None);
        let fetch_seq = StoredValue::new(2u64);

        apply_catalog_result(1, fetch_seq, Ok(Vec::new()), set_teas, set_banner);
        assert_eq!(teas.get_untracked(), vec![sencha()]);

        // A stale failure must not raise a banner either.
        apply_catalog_result(1, fetch_seq, Err("500".to_string()), set_teas, set_banner);
        assert!(banner.get_untracked().is_none());
    }
}
