//! Session management.
//!
//! The session token lives in two places: an in-memory signal and
//! LocalStorage. This module is the only code allowed to write either;
//! every mutating operation updates both before returning, so callers
//! never observe the copies disagreeing. Reads never reconcile.

use crate::api::TeaRateApi;
use crate::web::LocalStorage;
use leptos::prelude::*;
use tearate_shared::{LEGACY_TOKEN_KEYS, STORAGE_TOKEN_KEY, user_id_from_token};

/// Session state: the token is the sole authorization signal.
#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Numeric user id derived from the token. A malformed token
    /// yields `None` and renders the unauthenticated view.
    pub fn user_id(&self) -> Option<u32> {
        self.token.as_deref().and_then(user_id_from_token)
    }
}

/// Shared through Context so any component can read the session.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Derived signal for injection into the router guard.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().user_id().is_some())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Pick the surviving token among the canonical storage key and the
/// historical ones. The canonical key wins; otherwise the newest
/// legacy key that still holds a value.
fn resolve_token(
    canonical: Option<String>,
    legacy: impl IntoIterator<Item = Option<String>>,
) -> Option<String> {
    canonical.or_else(|| legacy.into_iter().flatten().next())
}

/// Remove every persisted copy of the token, legacy keys included.
/// A stale legacy entry must never resurrect a session.
fn clear_persisted_tokens() {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    for key in LEGACY_TOKEN_KEYS {
        LocalStorage::delete(key);
    }
}

/// Load the persisted token at startup. The two historical storage
/// keys are folded into the canonical one and deleted on every run,
/// whether or not a canonical value already exists.
pub fn init_auth(ctx: &AuthContext) {
    let canonical = LocalStorage::get(STORAGE_TOKEN_KEY);
    let legacy = LEGACY_TOKEN_KEYS.map(|key| LocalStorage::get(key));
    let token = resolve_token(canonical, legacy);

    for key in LEGACY_TOKEN_KEYS {
        LocalStorage::delete(key);
    }

    if let Some(token) = token {
        LocalStorage::set(STORAGE_TOKEN_KEY, &token);
        ctx.set_state.update(|state| state.token = Some(token));
    }
}

/// Install a token as the live session: persisted copy first, then
/// the in-memory signal, inside this one call.
fn adopt_token(ctx: &AuthContext, token: String) {
    LocalStorage::set(STORAGE_TOKEN_KEY, &token);
    ctx.set_state.update(|state| state.token = Some(token));
}

/// Log in with a username. On success the returned token becomes the
/// live session.
pub async fn login(ctx: &AuthContext, api: &TeaRateApi, username: String) -> Result<(), String> {
    let res = api.login(&username).await?;
    match res.token {
        Some(token) => {
            adopt_token(ctx, token);
            Ok(())
        }
        None => Err("login response carried no token".to_string()),
    }
}

/// Register a new user. The backend issues a token on success, so a
/// fresh registration logs straight in.
pub async fn register(ctx: &AuthContext, api: &TeaRateApi, name: String) -> Result<(), String> {
    let res = api.register_user(&name).await?;
    match res.token {
        Some(token) => {
            adopt_token(ctx, token);
            Ok(())
        }
        None => Err("registered, but no token was issued; try logging in".to_string()),
    }
}

/// End the session. The server call is best-effort; every local copy
/// of the token, legacy keys included, is cleared regardless of its
/// outcome.
pub async fn logout(ctx: &AuthContext, api: &TeaRateApi) {
    if let Err(e) = api.logout().await {
        web_sys::console::error_1(&format!("logout request failed: {}", e).into());
    }
    clear_persisted_tokens();
    ctx.set_state.update(|state| state.token = None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn canonical_token_wins_over_legacy_ones() {
        let token = resolve_token(some("user-1"), [some("user-2"), some("user-3")]);
        assert_eq!(token.as_deref(), Some("user-1"));
    }

    #[test]
    fn newest_legacy_key_wins_when_canonical_is_absent() {
        let token = resolve_token(None, [some("user-2"), some("user-3")]);
        assert_eq!(token.as_deref(), Some("user-2"));

        let token = resolve_token(None, [None, some("user-3")]);
        assert_eq!(token.as_deref(), Some("user-3"));
    }

    #[test]
    fn no_stored_token_means_no_session() {
        assert_eq!(resolve_token(None, [None, None]), None);
    }
}
