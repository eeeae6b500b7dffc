//! REST client for the tea-rating backend.
//!
//! One method per remote operation, one request per call. No retries,
//! no caching, no timeouts; callers interpret the result. Only the
//! dashboard call carries an explicit `Authorization` header.

use crate::web::HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tearate_shared::protocol::{
    DashboardRow, LoginRequest, RegisterTeaRequest, RegisterUserRequest, SummaryRow,
    TokenResponse, UserResponse,
};
use tearate_shared::{HEADER_AUTH, RatedTea, Rating, Tea};

/// Backend base address, fixed at compile time.
pub const DEFAULT_API_BASE: &str = match option_env!("TEARATE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8080",
};

#[derive(Clone, Debug, PartialEq)]
pub struct TeaRateApi {
    pub base_url: String,
}

impl TeaRateApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, String> {
        let res = HttpClient::get(&self.url(path))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("failed to fetch {}: {}", what, res.status()));
        }

        let body = res.text().await.map_err(|e| e.to_string())?;
        serde_json::from_str(&body).map_err(|e| e.to_string())
    }

    /// `POST /login` with a username; a token comes back on success.
    pub async fn login(&self, username: &str) -> Result<TokenResponse, String> {
        let body = to_json(&LoginRequest {
            username: username.to_string(),
        })?;
        let res = HttpClient::post(&self.url("/login"))
            .json_body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(match res.status() {
                401 => "no such user".to_string(),
                status => format!("login failed: {}", status),
            });
        }

        let body = res.text().await.map_err(|e| e.to_string())?;
        serde_json::from_str(&body).map_err(|e| e.to_string())
    }

    /// `POST /register-user`. The backend rejects duplicate names.
    pub async fn register_user(&self, name: &str) -> Result<TokenResponse, String> {
        let body = to_json(&RegisterUserRequest {
            name: name.to_string(),
        })?;
        let res = HttpClient::post(&self.url("/register-user"))
            .json_body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(match res.status() {
                409 => "that username is taken".to_string(),
                status => format!("registration failed: {}", status),
            });
        }

        let body = res.text().await.map_err(|e| e.to_string())?;
        serde_json::from_str(&body).map_err(|e| e.to_string())
    }

    /// `POST /logout`. Stateless on the server; the interesting part
    /// is the local cleanup done by the session module.
    pub async fn logout(&self) -> Result<(), String> {
        let res = HttpClient::post(&self.url("/logout"))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("logout failed: {}", res.status()));
        }
        Ok(())
    }

    /// `GET /teas`. The backend rejects the call without a user id;
    /// with one it filters out teas that user has already rated.
    pub async fn get_teas(&self, user_id: u32) -> Result<Vec<Tea>, String> {
        self.get_json(&teas_path(user_id), "teas").await
    }

    /// `POST /register-tea` with a name and provider.
    pub async fn register_tea(&self, tea_name: &str, provider: &str) -> Result<(), String> {
        let body = to_json(&RegisterTeaRequest {
            tea_name: tea_name.to_string(),
            provider: provider.to_string(),
        })?;
        let res = HttpClient::post(&self.url("/register-tea"))
            .json_body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(match res.status() {
                409 => "that tea is already registered".to_string(),
                status => format!("failed to register tea: {}", status),
            });
        }
        Ok(())
    }

    /// `GET /user/{id}`: the user's display name.
    pub async fn get_user(&self, user_id: u32) -> Result<UserResponse, String> {
        self.get_json(&format!("/user/{}", user_id), "user").await
    }

    /// `GET /user-ratings/{id}`: the user's ratings joined with tea names.
    pub async fn get_user_ratings(&self, user_id: u32) -> Result<Vec<RatedTea>, String> {
        self.get_json(&format!("/user-ratings/{}", user_id), "ratings")
            .await
    }

    /// `POST /submit`: create a rating from the full flat object.
    pub async fn submit_rating(&self, rating: &Rating) -> Result<(), String> {
        let body = to_json(rating)?;
        let res = HttpClient::post(&self.url("/submit"))
            .json_body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("failed to submit rating: {}", res.status()));
        }
        Ok(())
    }

    /// `PUT /ratings/{id}`: update an existing rating, keyed by its id.
    pub async fn edit_rating(&self, id: u32, rating: &Rating) -> Result<(), String> {
        let body = to_json(rating)?;
        let res = HttpClient::put(&self.url(&format!("/ratings/{}", id)))
            .json_body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("failed to save rating: {}", res.status()));
        }
        Ok(())
    }

    /// `GET /summary`: per-tea averages across all users.
    pub async fn get_summary(&self) -> Result<Vec<SummaryRow>, String> {
        self.get_json("/summary", "summary").await
    }

    /// `GET /dashboard`. The only call with an explicit auth header;
    /// the raw session token goes in `Authorization`.
    pub async fn get_dashboard(&self, token: &str) -> Result<Vec<DashboardRow>, String> {
        let res = HttpClient::get(&self.url("/dashboard"))
            .header(HEADER_AUTH, token)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(match res.status() {
                401 => "not signed in".to_string(),
                403 => "admin access required".to_string(),
                status => format!("failed to fetch dashboard: {}", status),
            });
        }

        let body = res.text().await.map_err(|e| e.to_string())?;
        if body.trim().is_empty() {
            // The endpoint authorizes but ships no stats yet.
            return Ok(Vec::new());
        }
        serde_json::from_str(&body).map_err(|e| e.to_string())
    }
}

impl Default for TeaRateApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE.to_string())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn teas_path(user_id: u32) -> String {
    format!("/teas?user_id={}", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let api = TeaRateApi::new("http://localhost:8080/".to_string());
        assert_eq!(api.base_url, "http://localhost:8080");
        assert_eq!(api.url("/teas"), "http://localhost:8080/teas");
        assert_eq!(api.url("teas"), "http://localhost:8080/teas");
    }

    #[test]
    fn tea_listing_path_always_carries_the_user_filter() {
        assert_eq!(teas_path(3), "/teas?user_id=3");

        let api = TeaRateApi::default();
        assert_eq!(
            api.url(&teas_path(3)),
            format!("{}/teas?user_id=3", api.base_url)
        );
    }
}
