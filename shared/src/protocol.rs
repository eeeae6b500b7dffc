//! Wire DTOs for the tea-rating REST API.
//!
//! Domain models live in the crate root; this module holds the request
//! and response bodies that exist only on the wire.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

/// Body of `POST /register-user`. The backend lowercases and trims
/// the name before creating the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
}

/// Response of login and registration. The token is optional on the
/// wire; registration responses of older backends omitted it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Body of `POST /register-tea`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterTeaRequest {
    pub tea_name: String,
    pub provider: String,
}

/// Response of `GET /user/{id}`: only the display name is exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub name: String,
}

/// One row of `GET /summary`: per-tea averages across all users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub tea_name: String,
    pub avg_rating: f64,
    pub avg_umami: f64,
    pub avg_astringency: f64,
    pub avg_floral: f64,
    pub avg_vegetal: f64,
    pub avg_nutty: f64,
    pub avg_roasted: f64,
}

/// One row of the admin dashboard payload. The endpoint currently
/// ships an empty body once authorized, so every field is defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardRow {
    #[serde(default)]
    pub tea_name: String,
    #[serde(default)]
    pub umami: f64,
    #[serde(default)]
    pub astringency: f64,
    #[serde(default)]
    pub floral: f64,
    #[serde(default)]
    pub vegetal: f64,
    #[serde(default)]
    pub nutty: f64,
    #[serde(default)]
    pub roasted: f64,
    #[serde(default)]
    pub body: f64,
    #[serde(default)]
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_request_serializes_username_only() {
        let body = serde_json::to_value(LoginRequest {
            username: "clovis".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "username": "clovis" }));
    }

    #[test]
    fn token_response_tolerates_missing_token() {
        let with: TokenResponse =
            serde_json::from_value(json!({ "message": "Login successful", "token": "user-3" }))
                .unwrap();
        assert_eq!(with.token.as_deref(), Some("user-3"));

        let without: TokenResponse =
            serde_json::from_value(json!({ "message": "Registration successful" })).unwrap();
        assert!(without.token.is_none());
    }

    #[test]
    fn register_tea_uses_backend_field_names() {
        let body = serde_json::to_value(RegisterTeaRequest {
            tea_name: "Yun Wu".into(),
            provider: "Tanzeela".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "tea_name": "Yun Wu", "provider": "Tanzeela" }));
    }
}
