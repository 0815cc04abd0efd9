//! Session store: the client's record of whether a user is authenticated
//! and with what token, plus the durable copy that survives restarts.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

/// Fixed name the access token is persisted under.
const TOKEN_KEY: &str = "accessToken";

/// In-memory storage for WASM, file-based for native
#[allow(dead_code)]
static SESSION_STORAGE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[cfg(not(target_arch = "wasm32"))]
fn storage_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("agnet").join("session");
    }

    PathBuf::from("cache").join("session")
}

/// Sanitize storage key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

/// Get a value from durable storage
#[cfg(not(target_arch = "wasm32"))]
pub fn storage_get(key: &str) -> Option<String> {
    let file_path = storage_dir().join(sanitize_key(key));
    fs::read_to_string(file_path).ok()
}

#[cfg(target_arch = "wasm32")]
pub fn storage_get(key: &str) -> Option<String> {
    let storage = SESSION_STORAGE.lock().ok()?;
    storage.get(key).cloned()
}

/// Set a value in durable storage
#[cfg(not(target_arch = "wasm32"))]
pub fn storage_set(key: &str, value: &str) -> Result<(), String> {
    let storage_dir = storage_dir();
    fs::create_dir_all(&storage_dir)
        .map_err(|e| format!("Failed to create session directory: {}", e))?;
    let file_path = storage_dir.join(sanitize_key(key));
    fs::write(file_path, value).map_err(|e| format!("Failed to write to storage: {}", e))
}

#[cfg(target_arch = "wasm32")]
pub fn storage_set(key: &str, value: &str) -> Result<(), String> {
    let mut storage = SESSION_STORAGE.lock().map_err(|e| e.to_string())?;
    storage.insert(key.to_string(), value.to_string());
    Ok(())
}

/// Delete a value from durable storage
#[cfg(not(target_arch = "wasm32"))]
pub fn storage_delete(key: &str) -> Result<(), String> {
    let file_path = storage_dir().join(sanitize_key(key));
    if file_path.exists() {
        fs::remove_file(file_path).map_err(|e| format!("Failed to delete from storage: {}", e))?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn storage_delete(key: &str) -> Result<(), String> {
    let mut storage = SESSION_STORAGE.lock().map_err(|e| e.to_string())?;
    storage.remove(key);
    Ok(())
}

/// Authentication state for the lifetime of the process.
///
/// The token is opaque to the client and never validated locally; a restored
/// token is trusted until an authorized request fails. Auth Gateway results
/// are committed here by the caller, and the chat/profile fetchers read the
/// token without ever mutating it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Rehydrate from durable storage. Runs exactly once per process start,
    /// in the root component's state initializer, so no frame ever renders
    /// the logged-out state for a logged-in user.
    pub fn restore() -> Self {
        Self {
            token: storage_get(TOKEN_KEY),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist `token` durably and mark the session authenticated.
    pub fn set(&mut self, token: impl Into<String>) {
        let token = token.into();
        if let Err(err) = storage_set(TOKEN_KEY, &token) {
            tracing::warn!("failed to persist access token: {err}");
        }
        self.token = Some(token);
    }

    /// Remove the durable copy and mark the session anonymous.
    pub fn clear(&mut self) {
        if let Err(err) = storage_delete(TOKEN_KEY) {
            tracing::warn!("failed to remove stored access token: {err}");
        }
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("accessToken"), "accessToken");
        assert_eq!(sanitize_key("user:token"), "user_token");
        assert_eq!(sanitize_key("../escape"), "___escape");
    }

    #[test]
    fn test_empty_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }
}
