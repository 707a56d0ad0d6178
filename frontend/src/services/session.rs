use anyhow::{anyhow, Result};
use billed_domain::SessionStore;
use gloo::storage::{LocalStorage, Storage};

/// Session store backed by the browser's localStorage
#[derive(Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to write {} to localStorage: {:?}", key, e))
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}
