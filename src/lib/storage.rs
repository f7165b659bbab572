//! Key/value access to browser storage. Auth state persists in
//! `localStorage`, while credentials kept for OTP resend live in
//! `sessionStorage` so they vanish with the tab. Failures (private mode,
//! quota, missing window) are logged and treated as absent values.

/// Minimal string store used by the auth session logic.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

/// `window.localStorage` / `window.sessionStorage`.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub const fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub const fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        match storage {
            Ok(storage) => storage,
            Err(_) => {
                tracing::warn!(area = ?self.area, "browser storage is unavailable");
                None
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        logged(self.area, key, "read", self.storage()?.get_item(key)).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            logged(self.area, key, "write", storage.set_item(key, value));
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            logged(self.area, key, "remove", storage.remove_item(key));
        }
    }
}

/// Logs a failed storage call and treats it as absent.
fn logged<T, E>(area: StorageArea, key: &str, action: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(area = ?area, key, "failed to {action} browser storage");
            None
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::KeyValueStore;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    /// In-memory store, shared between clones.
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.borrow().is_empty()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStorage, StorageArea, logged};

    #[test]
    fn memory_storage_round_trips_and_removes() {
        let store = MemoryStorage::new();
        assert!(store.is_empty());

        store.set("authToken", "abc");
        assert_eq!(store.get("authToken").as_deref(), Some("abc"));

        store.set("authToken", "def");
        assert_eq!(store.get("authToken").as_deref(), Some("def"));
        assert_eq!(store.len(), 1);

        store.remove("authToken");
        assert_eq!(store.get("authToken"), None);
    }

    #[test]
    fn memory_storage_clones_share_entries() {
        let store = MemoryStorage::new();
        let clone = store.clone();
        clone.set("loginEmail", "ada@example.com");
        assert_eq!(store.get("loginEmail").as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn failed_storage_calls_read_as_absent() {
        let failed: Result<Option<String>, ()> = Err(());
        assert_eq!(logged(StorageArea::Local, "authToken", "read", failed), None);
        assert_eq!(
            logged(StorageArea::Session, "loginEmail", "remove", Err::<(), _>("quota")),
            None
        );
    }

    #[test]
    fn successful_storage_calls_pass_through() {
        let read: Result<Option<String>, ()> = Ok(Some("abc".to_string()));
        assert_eq!(
            logged(StorageArea::Local, "authToken", "read", read).flatten(),
            Some("abc".to_string())
        );
        assert_eq!(logged(StorageArea::Local, "authToken", "write", Ok::<(), ()>(())), Some(()));
    }
}
