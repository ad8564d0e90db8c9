use gloo::storage::{LocalStorage, Storage};
use shared::{ClientConfig, Profile};
use wasm_bindgen::JsValue;

use crate::services::config::client_config;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Local storage error: {0}")]
pub struct StorageError(String);

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Session data kept in the browser's local storage.
///
/// Values are stored as plain strings, so the raw `web_sys::Storage` is used
/// rather than gloo's JSON-encoding helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    token_key: String,
    profile_key: String,
}

impl SessionStore {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            token_key: config.token_storage_key.clone(),
            profile_key: config.profile_storage_key.clone(),
        }
    }

    pub fn save_token(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw().set_item(&self.token_key, token)?;
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.token_key).ok().flatten()
    }

    pub fn save_profile(&self, profile: Profile) -> Result<(), StorageError> {
        LocalStorage::raw().set_item(&self.profile_key, profile.as_str())?;
        Ok(())
    }

    /// The stored profile; unrecognized values read as no profile
    pub fn profile(&self) -> Option<Profile> {
        LocalStorage::raw()
            .get_item(&self.profile_key)
            .ok()
            .flatten()
            .and_then(|value| value.parse().ok())
    }

    /// Forget the session (sign out)
    pub fn clear(&self) -> Result<(), StorageError> {
        let storage = LocalStorage::raw();
        storage.remove_item(&self.token_key)?;
        storage.remove_item(&self.profile_key)?;
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(&client_config())
    }
}
