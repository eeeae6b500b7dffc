use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// Constants
// =========================================================

/// Canonical local-storage key for the session token.
pub const STORAGE_TOKEN_KEY: &str = "tearate_token";

/// Historical storage keys, newest first. Migrated into
/// [`STORAGE_TOKEN_KEY`] on startup and deleted.
pub const LEGACY_TOKEN_KEYS: [&str; 2] = ["authToken", "token"];

/// Header carrying the raw session token on admin calls.
pub const HEADER_AUTH: &str = "Authorization";

/// Tokens issued by the backend look like `user-<id>`.
pub const TOKEN_USER_PREFIX: &str = "user-";

/// Sentinel tea id meaning "nothing selected" in the rating form.
pub const TEA_UNSELECTED: u32 = 0;

// =========================================================
// Domain models
// =========================================================

/// A registered user. Created server-side; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

/// A tea in the catalog. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Tea {
    pub id: u32,
    pub tea_name: String,
    pub provider: String,
    /// Optional origin note, folded into the display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Tea {
    /// Label shown in selectors: `name (source)` when a source exists.
    pub fn display(&self) -> String {
        match self.source.as_deref() {
            Some(src) if !src.is_empty() => format!("{} ({})", self.tea_name, src),
            _ => self.tea_name.clone(),
        }
    }
}

/// A structured sensory rating. `id == 0` marks an unsaved draft;
/// a non-zero id means the rating exists server-side and edits are
/// keyed by it. The tea association is immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    #[serde(default)]
    pub id: u32,
    pub user_id: u32,
    pub tea_id: u32,
    pub umami: f64,
    pub astringency: f64,
    pub floral: f64,
    pub vegetal: f64,
    pub nutty: f64,
    pub roasted: f64,
    pub body: f64,
    pub rating: f64,
}

impl Rating {
    /// A fresh draft for the given user: all scores zero, no tea selected.
    pub fn draft(user_id: u32) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Whether this rating has been persisted yet.
    pub fn is_draft(&self) -> bool {
        self.id == 0
    }

    /// Whether a tea has been chosen for this rating.
    pub fn has_tea(&self) -> bool {
        self.tea_id != TEA_UNSELECTED
    }
}

/// A rating joined with its tea's name, as returned by the
/// user-ratings listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedTea {
    #[serde(flatten)]
    pub rating: Rating,
    pub tea_name: String,
}

// =========================================================
// Token helpers
// =========================================================

/// Extract the numeric user id from a `user-<id>` session token.
///
/// Returns `None` for anything that does not match the issued shape;
/// callers treat that as "not authenticated".
pub fn user_id_from_token(token: &str) -> Option<u32> {
    token
        .strip_prefix(TOKEN_USER_PREFIX)
        .and_then(|id| id.parse::<u32>().ok())
}

// =========================================================
// Unit tests
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_starts_all_zero_with_no_tea() {
        let draft = Rating::draft(7);
        assert_eq!(draft.id, 0);
        assert_eq!(draft.user_id, 7);
        assert_eq!(draft.tea_id, TEA_UNSELECTED);
        assert!(draft.is_draft());
        assert!(!draft.has_tea());
        for score in [
            draft.umami,
            draft.astringency,
            draft.floral,
            draft.vegetal,
            draft.nutty,
            draft.roasted,
            draft.body,
            draft.rating,
        ] {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn submit_body_merges_ids_beside_scores() {
        let rating = Rating {
            id: 0,
            user_id: 1,
            tea_id: 12,
            umami: 5.0,
            astringency: 3.0,
            floral: 0.0,
            vegetal: 2.0,
            nutty: 1.0,
            roasted: 4.0,
            body: 3.0,
            rating: 7.0,
        };
        let value = serde_json::to_value(&rating).unwrap();
        assert_eq!(value["user_id"], json!(1));
        assert_eq!(value["tea_id"], json!(12));
        assert_eq!(value["umami"], json!(5.0));
        assert_eq!(value["rating"], json!(7.0));
        // Flat object, not nested under a "scores" key.
        assert!(value.get("scores").is_none());
    }

    #[test]
    fn rated_tea_flattens_the_joined_name() {
        let listed: RatedTea = serde_json::from_value(json!({
            "id": 9,
            "user_id": 1,
            "tea_id": 4,
            "umami": 1.5,
            "astringency": 0.0,
            "floral": 2.0,
            "vegetal": 0.0,
            "nutty": 0.0,
            "roasted": 3.0,
            "body": 1.0,
            "rating": 6.0,
            "tea_name": "Dragonwell"
        }))
        .unwrap();
        assert_eq!(listed.tea_name, "Dragonwell");
        assert_eq!(listed.rating.id, 9);
        assert_eq!(listed.rating.tea_id, 4);
        assert!(!listed.rating.is_draft());
    }

    #[test]
    fn tea_display_includes_source_when_present() {
        let plain = Tea {
            id: 1,
            tea_name: "Laoshan".into(),
            provider: "Itsi".into(),
            source: None,
        };
        assert_eq!(plain.display(), "Laoshan");

        let sourced = Tea {
            source: Some("Shandong".into()),
            ..plain
        };
        assert_eq!(sourced.display(), "Laoshan (Shandong)");
    }

    #[test]
    fn token_parsing_accepts_only_issued_shape() {
        assert_eq!(user_id_from_token("user-42"), Some(42));
        assert_eq!(user_id_from_token("user-0"), Some(0));
        assert_eq!(user_id_from_token("user-"), None);
        assert_eq!(user_id_from_token("user-x"), None);
        assert_eq!(user_id_from_token("admin-42"), None);
        assert_eq!(user_id_from_token(""), None);
    }
}
