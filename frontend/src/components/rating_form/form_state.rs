//! Rating form state.
//!
//! Gathers the per-field signals into one `FormState` that owns
//! holding the data, resetting it, syncing it from an edit target,
//! and converting it into the wire object.

use leptos::prelude::*;
use tearate_shared::{Rating, TEA_UNSELECTED};

/// Form field signals. `RwSignal` is `Copy`, so the whole state moves
/// freely into child components and closures.
#[derive(Clone, Copy)]
pub struct FormState {
    pub tea_id: RwSignal<u32>,
    pub umami: RwSignal<f64>,
    pub astringency: RwSignal<f64>,
    pub floral: RwSignal<f64>,
    pub vegetal: RwSignal<f64>,
    pub nutty: RwSignal<f64>,
    pub roasted: RwSignal<f64>,
    pub body: RwSignal<f64>,
    pub rating: RwSignal<f64>,
}

impl FormState {
    /// All-zero defaults, tea unselected.
    pub fn new() -> Self {
        Self {
            tea_id: RwSignal::new(TEA_UNSELECTED),
            umami: RwSignal::new(0.0),
            astringency: RwSignal::new(0.0),
            floral: RwSignal::new(0.0),
            vegetal: RwSignal::new(0.0),
            nutty: RwSignal::new(0.0),
            roasted: RwSignal::new(0.0),
            body: RwSignal::new(0.0),
            rating: RwSignal::new(0.0),
        }
    }

    /// Back to the documented all-zero default.
    pub fn reset(&self) {
        self.tea_id.set(TEA_UNSELECTED);
        self.umami.set(0.0);
        self.astringency.set(0.0);
        self.floral.set(0.0);
        self.vegetal.set(0.0);
        self.nutty.set(0.0);
        self.roasted.set(0.0);
        self.body.set(0.0);
        self.rating.set(0.0);
    }

    /// Adopt every field from an existing rating. Called again when
    /// the edit target arrives after mount; idempotent.
    pub fn sync_from(&self, rating: &Rating) {
        self.tea_id.set(rating.tea_id);
        self.umami.set(rating.umami);
        self.astringency.set(rating.astringency);
        self.floral.set(rating.floral);
        self.vegetal.set(rating.vegetal);
        self.nutty.set(rating.nutty);
        self.roasted.set(rating.roasted);
        self.body.set(rating.body);
        self.rating.set(rating.rating);
    }

    /// Build the object to submit. In edit mode the id and the tea
    /// association come from the original; the tea is immutable once
    /// the rating exists.
    pub fn to_rating(&self, user_id: u32, editing: Option<&Rating>) -> Rating {
        Rating {
            id: editing.map(|r| r.id).unwrap_or(0),
            user_id,
            tea_id: editing.map(|r| r.tea_id).unwrap_or_else(|| self.tea_id.get()),
            umami: self.umami.get(),
            astringency: self.astringency.get(),
            floral: self.floral.get(),
            vegetal: self.vegetal.get(),
            nutty: self.nutty.get(),
            roasted: self.roasted.get(),
            body: self.body.get(),
            rating: self.rating.get(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Rating {
        Rating {
            id: 9,
            user_id: 1,
            tea_id: 4,
            umami: 5.0,
            astringency: 3.0,
            floral: 0.0,
            vegetal: 2.0,
            nutty: 1.0,
            roasted: 4.0,
            body: 3.0,
            rating: 7.0,
        }
    }

    #[test]
    fn fresh_state_matches_the_draft_default() {
        let state = FormState::new();
        assert_eq!(state.to_rating(1, None), Rating::draft(1));
    }

    #[test]
    fn sync_adopts_every_field_and_is_idempotent() {
        let state = FormState::new();
        let target = sample();
        state.sync_from(&target);
        state.sync_from(&target);
        assert_eq!(state.tea_id.get(), 4);
        assert_eq!(state.umami.get(), 5.0);
        assert_eq!(state.rating.get(), 7.0);
        // Everything except the ids round-trips through to_rating.
        assert_eq!(state.to_rating(1, Some(&target)), target);
    }

    #[test]
    fn reset_returns_to_all_zero() {
        let state = FormState::new();
        state.sync_from(&sample());
        state.reset();
        assert_eq!(state.to_rating(1, None), Rating::draft(1));
    }

    #[test]
    fn create_mode_merges_user_and_selected_tea() {
        let state = FormState::new();
        state.tea_id.set(12);
        state.umami.set(5.0);
        state.rating.set(7.0);
        let out = state.to_rating(1, None);
        assert_eq!(out.id, 0);
        assert_eq!(out.user_id, 1);
        assert_eq!(out.tea_id, 12);
        assert_eq!(out.umami, 5.0);
        assert_eq!(out.rating, 7.0);
    }

    #[test]
    fn edit_mode_keys_by_the_original_id_and_tea() {
        let state = FormState::new();
        let original = sample();
        state.sync_from(&original);
        // Even if the selection signal were tampered with, the tea
        // association stays with the original.
        state.tea_id.set(99);
        let out = state.to_rating(1, Some(&original));
        assert_eq!(out.id, 9);
        assert_eq!(out.tea_id, 4);
    }
}
