//! # Storage Traits
//!
//! Storage abstractions used by the domain layer. The document store and the
//! session store are external; these traits are the only thing the domain
//! knows about them.

use anyhow::Result;
use async_trait::async_trait;
use shared::Bill;

/// The bills collection of the document store
#[async_trait(?Send)]
pub trait BillStorage {
    /// Fetch every bill in the collection, in store order
    async fn list_bills(&self) -> Result<Vec<Bill>>;

    /// Add a bill to the collection
    /// Returns the identifier assigned by the store
    async fn add_bill(&self, bill: &Bill) -> Result<String>;
}

/// A file picked in the new bill form
#[derive(Debug, Clone, PartialEq)]
pub struct ProofFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ProofFile {
    pub fn new(name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }
}

/// File storage of the document store
#[async_trait(?Send)]
pub trait FileStorage {
    /// Store `file` under `path` and resolve its publicly retrievable URL
    async fn put(&self, path: &str, file: &ProofFile) -> Result<String>;
}

/// Persisted key/value storage holding the session (localStorage in the browser)
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove every key
    fn clear(&self);
}
