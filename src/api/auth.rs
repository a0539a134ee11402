//! Account endpoints: registration, login, profile, password change.
//!
//! Login and registration both return a `{token, user}` pair that the
//! caller persists through `Session`; profile reads use the stored token
//! like every other authenticated call.

use super::{ApiClient, ApiError};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const REGISTER_URL: &str = "auth/register";
const LOGIN_URL: &str = "auth/login";
const PROFILE_URL: &str = "auth/profile";
const CHANGE_PASSWORD_URL: &str = "auth/change-password";

/// The authenticated account as reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Session payload returned by login and registration.
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
struct ProfilePayload {
    user: User,
}

pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: ApiClient::new(api_url),
        }
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<AuthPayload, ApiError> {
        self.client
            .fetch(self.client.json_request(Method::POST, REGISTER_URL, payload))
            .await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, ApiError> {
        self.client
            .fetch(self.client.json_request(Method::POST, LOGIN_URL, credentials))
            .await
    }

    /// Fetches the current user for the stored token.
    pub async fn profile(&self) -> Result<User, ApiError> {
        let payload: ProfilePayload = self.client.fetch(self.client.request(Method::GET, PROFILE_URL)).await?;
        Ok(payload.user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let payload: ProfilePayload = self
            .client
            .fetch(self.client.json_request(Method::PUT, PROFILE_URL, update))
            .await?;
        Ok(payload.user)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.client
            .execute(self.client.json_request(Method::PUT, CHANGE_PASSWORD_URL, change))
            .await?;
        Ok(())
    }
}
