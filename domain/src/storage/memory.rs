//! In-memory storage used when no document store is configured, and by tests.

use anyhow::Result;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use shared::Bill;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::traits::{BillStorage, FileStorage, ProofFile, SessionStore};

/// Bills collection kept in memory. Clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryBillStore {
    bills: Rc<RefCell<Vec<Bill>>>,
    next_id: Rc<Cell<u64>>,
}

impl InMemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        let store = Self::default();
        store.next_id.set(bills.len() as u64);
        *store.bills.borrow_mut() = bills;
        store
    }

    /// Snapshot of the stored bills
    pub fn bills(&self) -> Vec<Bill> {
        self.bills.borrow().clone()
    }
}

#[async_trait(?Send)]
impl BillStorage for InMemoryBillStore {
    async fn list_bills(&self) -> Result<Vec<Bill>> {
        Ok(self.bills())
    }

    async fn add_bill(&self, bill: &Bill) -> Result<String> {
        let next = self.next_id.get() + 1;
        self.next_id.set(next);
        let id = format!("bill::{}", next);

        let mut stored = bill.clone();
        stored.id = Some(id.clone());
        self.bills.borrow_mut().push(stored);

        debug!("Stored bill {} in memory", id);
        Ok(id)
    }
}

/// File storage kept in memory. Download URLs are `data:` URLs so the
/// proof modal can display them without a server.
#[derive(Clone, Default)]
pub struct InMemoryFileStorage {
    files: Rc<RefCell<HashMap<String, ProofFile>>>,
}

impl InMemoryFileStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<ProofFile> {
        self.files.borrow().get(path).cloned()
    }
}

#[async_trait(?Send)]
impl FileStorage for InMemoryFileStorage {
    async fn put(&self, path: &str, file: &ProofFile) -> Result<String> {
        self.files.borrow_mut().insert(path.to_string(), file.clone());
        Ok(format!("data:{};base64,{}", file.content_type, STANDARD.encode(&file.bytes)))
    }
}

/// Session storage kept in memory
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fixtures::sample_bills;

    #[tokio::test]
    async fn test_add_bill_assigns_id() {
        let store = InMemoryBillStore::with_bills(sample_bills());
        let mut bill = sample_bills()[0].clone();
        bill.id = None;

        let id = store.add_bill(&bill).await.expect("Failed to add bill");

        let bills = store.list_bills().await.expect("Failed to list bills");
        assert_eq!(bills.len(), 5);
        assert_eq!(bills[4].id.as_deref(), Some(id.as_str()));
        assert!(bills.iter().filter(|b| b.id.as_deref() == Some(id.as_str())).count() == 1);
    }

    #[tokio::test]
    async fn test_put_returns_data_url() {
        let storage = InMemoryFileStorage::new();
        let file = ProofFile::new("bill.png", "image/png", vec![1, 2, 3]);

        let url = storage.put("justificatifs/bill.png", &file).await.unwrap();

        assert_eq!(url, "data:image/png;base64,AQID");
        assert_eq!(storage.get("justificatifs/bill.png"), Some(file));
    }

    #[test]
    fn test_session_store_clear() {
        let store = InMemorySessionStore::new();
        store.set_item("user", "{}").unwrap();
        assert_eq!(store.get_item("user").as_deref(), Some("{}"));

        store.clear();
        assert!(store.get_item("user").is_none());
    }
}
