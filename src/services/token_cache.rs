// ============================================================================
// TOKEN CACHE - Durable, best-effort mirror of the session token
// ============================================================================
// The session store only ever WRITES here (`TokenSink`). Reading the mirror
// back (`TokenSource`) is reserved for screens that issue their own API
// calls; nothing reads it back into the session store.
// ============================================================================

use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};

use crate::config::CONFIG;
use crate::errors::ApiError;

/// Write side of the token mirror, held by the session store
pub trait TokenSink {
    fn store(&self, token: &str) -> Result<(), ApiError>;
    fn clear(&self) -> Result<(), ApiError>;
}

/// Read side of the token mirror, used by API-calling screens only
pub trait TokenSource {
    fn load(&self) -> Option<String>;
}

/// Plain string storage; the token is kept as the raw value, not JSON
pub trait StringStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// The browser's localStorage, through its raw string API
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl StringStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| format!("{:?}", e))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| format!("{:?}", e))
    }
}

/// Token mirror kept under one key of a string storage
#[derive(Clone)]
pub struct StorageTokenCache<S> {
    key: String,
    storage: S,
}

pub type LocalStorageTokenCache = StorageTokenCache<BrowserStorage>;

impl LocalStorageTokenCache {
    pub fn new() -> Self {
        StorageTokenCache::in_storage(CONFIG.token_storage_key.clone(), BrowserStorage)
    }
}

impl Default for LocalStorageTokenCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StringStorage> StorageTokenCache<S> {
    pub fn in_storage(key: impl Into<String>, storage: S) -> Self {
        Self {
            key: key.into(),
            storage,
        }
    }
}

impl<S: StringStorage> TokenSink for StorageTokenCache<S> {
    fn store(&self, token: &str) -> Result<(), ApiError> {
        self.storage
            .set_item(&self.key, token)
            .map_err(ApiError::Storage)?;
        log::debug!("💾 [TOKEN] Token mirrored under '{}'", self.key);
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        self.storage
            .remove_item(&self.key)
            .map_err(ApiError::Storage)?;
        log::debug!("🧹 [TOKEN] Token mirror cleared");
        Ok(())
    }
}

impl<S: StringStorage> TokenSource for StorageTokenCache<S> {
    fn load(&self) -> Option<String> {
        self.storage
            .get_item(&self.key)
            .filter(|token| !token.is_empty())
    }
}

/// In-process token mirror for hosts without localStorage
#[derive(Default)]
pub struct MemoryTokenCache {
    token: RefCell<Option<String>>,
}

impl MemoryTokenCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenSink for MemoryTokenCache {
    fn store(&self, token: &str) -> Result<(), ApiError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

impl TokenSource for MemoryTokenCache {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStorage {
        items: RefCell<HashMap<String, String>>,
    }

    impl StringStorage for &MapStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<(), String> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }

    struct FullStorage;

    impl StringStorage for FullStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("QuotaExceededError".to_string())
        }

        fn remove_item(&self, _key: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn token_is_stored_as_the_raw_string() {
        let storage = MapStorage::default();
        let cache = StorageTokenCache::in_storage("token", &storage);

        cache.store("t1").unwrap();
        assert_eq!(storage.items.borrow().get("token").map(String::as_str), Some("t1"));
        assert_eq!(cache.load().as_deref(), Some("t1"));

        cache.clear().unwrap();
        assert!(storage.items.borrow().is_empty());
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn token_written_by_other_scripts_is_readable() {
        let storage = MapStorage::default();
        storage
            .items
            .borrow_mut()
            .insert("token".to_string(), "eyJhbGciOi.abc".to_string());
        let cache = StorageTokenCache::in_storage("token", &storage);

        assert_eq!(cache.load().as_deref(), Some("eyJhbGciOi.abc"));
    }

    #[test]
    fn storage_failure_surfaces_as_storage_error() {
        let cache = StorageTokenCache::in_storage("token", FullStorage);
        assert_eq!(
            cache.store("t1"),
            Err(ApiError::Storage("QuotaExceededError".to_string()))
        );
    }

    #[test]
    fn memory_cache_round_trips_and_clears() {
        let cache = MemoryTokenCache::new();
        assert_eq!(cache.load(), None);

        cache.store("t1").unwrap();
        assert_eq!(cache.load().as_deref(), Some("t1"));

        cache.clear().unwrap();
        assert_eq!(cache.load(), None);
    }
}
