//! Session token storage.
//!
//! The API client reads and refreshes tokens through [`SessionStore`]
//! instead of reaching into browser storage itself, so tests can hand it a
//! [`MemorySessionStore`].

use std::sync::Mutex;

use super::error::StorageError;
use crate::models::Session;
use crate::utils::dom;

/// Where the current session lives.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<(), StorageError>;
    fn clear(&self);
}

/// Session persisted as JSON in localStorage.
///
/// The login flow writes the same key; this store only reads it and keeps
/// refreshed tokens in sync.
#[derive(Clone, Debug)]
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = dom::local_storage()?;
        let json = storage.get_item(&self.key).ok()??;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("stored session unreadable: {}", e);
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        let json = serde_json::to_string(session).map_err(|_| StorageError::SerializationFailed)?;
        storage
            .set_item(&self.key, &json)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn clear(&self) {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// Session kept in memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.session.lock().ok()?.clone()
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let mut slot = self.session.lock().map_err(|_| StorageError::WriteFailed)?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::default();
        assert_eq!(store.load(), None);

        let session = Session {
            access_token: "a".into(),
            refresh_token: Some("r".into()),
            role: None,
        };
        store.save(&session).unwrap();
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
