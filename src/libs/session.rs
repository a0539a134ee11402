//! Durable session storage for the authenticated user.
//!
//! The bearer token and the serialized user object are persisted under fixed
//! file names in the application data directory, so a session survives
//! process restarts. The token is read again at every request, and the whole
//! session is cleared on logout or whenever any request comes back with
//! HTTP 401.

use super::data_storage::DataStorage;
use crate::api::auth::User;
use anyhow::Result;
use std::fs;

const TOKEN_FILE: &str = ".token";
const USER_FILE: &str = "user.json";

/// Accessor over the persisted token/user pair.
pub struct Session;

impl Session {
    /// Persists the session after a successful login or registration.
    pub fn save(token: &str, user: &User) -> Result<()> {
        let storage = DataStorage::new();
        fs::write(storage.get_path(TOKEN_FILE)?, token)?;
        fs::write(storage.get_path(USER_FILE)?, serde_json::to_string(user)?)?;
        Ok(())
    }

    /// Replaces only the cached user object, keeping the current token.
    pub fn save_user(user: &User) -> Result<()> {
        let storage = DataStorage::new();
        fs::write(storage.get_path(USER_FILE)?, serde_json::to_string(user)?)?;
        Ok(())
    }

    /// Returns the stored bearer token, if a session exists.
    pub fn token() -> Option<String> {
        let path = DataStorage::new().get_path(TOKEN_FILE).ok()?;
        let token = fs::read_to_string(path).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return None;
        }
        Some(token)
    }

    /// Returns the cached user object, if a session exists.
    pub fn user() -> Option<User> {
        let path = DataStorage::new().get_path(USER_FILE).ok()?;
        let raw = fs::read_to_string(path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Removes all persisted session state. Missing files are not an error.
    pub fn clear() -> Result<()> {
        let storage = DataStorage::new();
        for file in [TOKEN_FILE, USER_FILE] {
            let path = storage.get_path(file)?;
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    /// True when a token is stored and the user can issue authenticated calls.
    pub fn is_active() -> bool {
        Self::token().is_some()
    }
}
