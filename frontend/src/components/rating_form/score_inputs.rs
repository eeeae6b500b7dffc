//! Numeric score inputs for the rating form.
//!
//! Pure input rendering; parsing is permissive by design. A value
//! that does not parse as a number leaves the previous one in place.

use leptos::prelude::*;

use super::form_state::FormState;

#[component]
fn ScoreField(label: &'static str, value: RwSignal<f64>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type="number"
                step="any"
                class="input input-bordered w-full"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                        value.set(parsed);
                    }
                }
            />
        </div>
    }
}

/// The seven sensory scores plus the overall score.
#[component]
pub fn ScoreInputs(state: FormState) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <ScoreField label="Umami" value=state.umami />
            <ScoreField label="Astringency" value=state.astringency />
            <ScoreField label="Floral" value=state.floral />
            <ScoreField label="Vegetal" value=state.vegetal />
            <ScoreField label="Nutty" value=state.nutty />
            <ScoreField label="Roasted" value=state.roasted />
            <ScoreField label="Body" value=state.body />
            <ScoreField label="Overall" value=state.rating />
        </div>
    }
}
