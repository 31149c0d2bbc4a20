//! In-memory user storage.

mod users;

pub use users::*;

use std::collections::BTreeMap;
use std::sync::Arc;

use payloads::{User, UserId};
use tokio::sync::RwLock;

/// Shared handle to the user table. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User not found")]
    UserNotFound,
    #[error("A user with id {id} already exists")]
    UserIdNotUnique { id: UserId },
}
