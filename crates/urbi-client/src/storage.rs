//! LocalStorage persistence for the signed-in session.

use urbi_core::StorageError;
use urbi_core::model::User;

use crate::services::config;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Token and user saved by the last successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

impl StoredSession {
    /// Loads the stored session; `None` unless both token and user are present
    /// and the user JSON parses.
    pub fn load() -> Option<Self> {
        let config = config();
        let storage = local_storage().ok()?;
        let token = storage.get_item(config.token_key).ok()??;
        let user_json = storage.get_item(config.user_key).ok()??;
        match serde_json::from_str(&user_json) {
            Ok(user) => Some(Self { token, user }),
            Err(e) => {
                tracing::error!("Failed to load auth from storage: {}", e);
                None
            }
        }
    }

    /// Saves token and user JSON.
    pub fn save(&self) -> Result<(), StorageError> {
        let config = config();
        let storage = local_storage()?;
        let user_json = serde_json::to_string(&self.user)?;
        storage
            .set_item(config.token_key, &self.token)
            .map_err(|_| StorageError::Write(config.token_key.to_string()))?;
        storage
            .set_item(config.user_key, &user_json)
            .map_err(|_| StorageError::Write(config.user_key.to_string()))?;
        Ok(())
    }

    /// Removes any stored session.
    pub fn clear() {
        let config = config();
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(config.token_key);
            let _ = storage.remove_item(config.user_key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn user() -> User {
        User {
            id: "u1".to_string(),
            phone_number: "+15550100".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_session_round_trip_and_clear() {
        let session = StoredSession {
            token: "secret".to_string(),
            user: user(),
        };
        session.save().unwrap();
        assert_eq!(StoredSession::load(), Some(session));

        StoredSession::clear();
        assert_eq!(StoredSession::load(), None);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_user_is_ignored() {
        let config = config();
        let storage = local_storage().unwrap();
        storage.set_item(config.token_key, "secret").unwrap();
        storage.set_item(config.user_key, "{not json").unwrap();
        assert_eq!(StoredSession::load(), None);
        StoredSession::clear();
    }
}
