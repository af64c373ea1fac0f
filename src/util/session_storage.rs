//! Persisted-session storage over `localStorage`.
//!
//! The backend contract is that the client keeps its own copy of the last
//! issued session; the synchronizer reads it at startup as the initial
//! snapshot. Requires a browser environment; native builds see no session.

use crate::net::types::Session;

#[cfg(feature = "web")]
const STORAGE_KEY: &str = "nawe_session";

/// Read the persisted session, if any. Unparseable stored values are
/// treated as absent.
#[must_use]
pub fn load() -> Option<Session> {
    #[cfg(feature = "web")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Persist the session, replacing any previous one.
pub fn store(session: &Session) {
    #[cfg(feature = "web")]
    {
        if let Ok(raw) = serde_json::to_string(session) {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = session;
    }
}

/// Drop the persisted session.
pub fn clear() {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
