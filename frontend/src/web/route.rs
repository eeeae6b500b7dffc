//! Route definitions. Pure domain logic, no DOM access, so this
//! module stays unit testable off-wasm.

use std::fmt::Display;

/// Application routes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Home page (default). Public: it branches on the session itself,
    /// showing the login form when no token is present.
    #[default]
    Home,
    /// Admin dashboard. Requires an authenticated session.
    Admin,
    /// Unknown path.
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/home" => Self::Home,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }

    /// Whether the route may only render with a live session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Where to send a visitor who fails the auth check.
    pub fn auth_failure_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [AppRoute::Home, AppRoute::Admin] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(AppRoute::from_path("/no-such-page"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
    }

    #[test]
    fn only_admin_is_guarded() {
        assert!(AppRoute::Admin.requires_auth());
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Home);
    }
}
