//! Session access: the logged-in user stored under the `"user"` key.

use log::info;
use shared::{Route, User, USER_SESSION_KEY};
use std::rc::Rc;

use crate::domain::navigation::Navigator;
use crate::storage::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No user is stored in the session")]
    Missing,
    #[error("Stored user is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Failed to write the session: {0}")]
    Storage(#[source] anyhow::Error),
}

#[derive(Clone)]
pub struct SessionService {
    store: Rc<dyn SessionStore>,
}

impl SessionService {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Deserialize the stored user
    pub fn current_user(&self) -> Result<User, SessionError> {
        let raw = self.store.get_item(USER_SESSION_KEY).ok_or(SessionError::Missing)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist `user` as the session user
    pub fn sign_in(&self, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user)?;
        self.store
            .set_item(USER_SESSION_KEY, &raw)
            .map_err(SessionError::Storage)?;
        info!("Signed in as {:?}", user.email);
        Ok(())
    }

    /// Log out: clear the whole session store, then show the login page
    pub fn logout(&self, navigator: &dyn Navigator) {
        self.store.clear();
        info!("Session cleared");
        navigator.navigate(Route::Login);
    }
}
