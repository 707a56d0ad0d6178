//! Test doubles for the storage and navigation seams.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::{Bill, Route};
use std::cell::RefCell;
use std::time::Duration;

use crate::domain::navigation::Navigator;
use crate::storage::{BillStorage, FileStorage, ProofFile};

/// Navigator that records every call. The current route is the last one navigated to.
pub struct RecordingNavigator {
    initial: Route,
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new(initial: Route) -> Self {
        Self {
            initial,
            routes: RefCell::new(Vec::new()),
        }
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }

    fn current_route(&self) -> Option<Route> {
        Some(self.routes.borrow().last().copied().unwrap_or(self.initial))
    }
}

/// Store whose every call fails with `message`
pub struct FailingBillStore {
    pub message: String,
}

impl FailingBillStore {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

#[async_trait(?Send)]
impl BillStorage for FailingBillStore {
    async fn list_bills(&self) -> Result<Vec<Bill>> {
        Err(anyhow!("{}", self.message))
    }

    async fn add_bill(&self, _bill: &Bill) -> Result<String> {
        Err(anyhow!("{}", self.message))
    }
}

pub struct FailingFileStorage;

#[async_trait(?Send)]
impl FileStorage for FailingFileStorage {
    async fn put(&self, path: &str, _file: &ProofFile) -> Result<String> {
        Err(anyhow!("storage unavailable for {}", path))
    }
}

/// File storage that answers `url/<path>`, after `delay` for files named `slow_name`
pub struct SlowFileStorage {
    slow_name: String,
    delay: Duration,
}

impl SlowFileStorage {
    pub fn new(slow_name: &str, delay: Duration) -> Self {
        Self {
            slow_name: slow_name.to_string(),
            delay,
        }
    }
}

#[async_trait(?Send)]
impl FileStorage for SlowFileStorage {
    async fn put(&self, path: &str, file: &ProofFile) -> Result<String> {
        if file.name == self.slow_name {
            tokio::time::sleep(self.delay).await;
        }
        Ok(format!("url/{}", path))
    }
}
