//! In-memory user store for tests and the demo binary.
//! Used by: state, main.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::users::{AuthUser, User, UserStore};

pub struct MemoryUserStore<U = User> {
    users: RwLock<HashMap<String, U>>,
}

impl<U: AuthUser> MemoryUserStore<U> {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_users(users: impl IntoIterator<Item = U>) -> Self {
        let users = users.into_iter().map(|u| (u.id(), u)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn insert(&self, user: U) -> Result<Option<U>> {
        let mut users = self.users.write().map_err(|e| Error::Store(e.to_string()))?;
        Ok(users.insert(user.id(), user))
    }

    pub fn len(&self) -> Result<usize> {
        let users = self.users.read().map_err(|e| Error::Store(e.to_string()))?;
        Ok(users.len())
    }
}

impl MemoryUserStore<User> {
    /// Loads a JSON array of users.
    pub fn from_json(raw: &str) -> Result<Self> {
        let users: Vec<User> = serde_json::from_str(raw)?;
        Ok(Self::with_users(users))
    }
}

impl<U: AuthUser> Default for MemoryUserStore<U> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<U: AuthUser> UserStore<U> for MemoryUserStore<U> {
    async fn get_by_id(&self, id: &str) -> Result<Option<U>> {
        let users = self.users.read().map_err(|e| Error::Store(e.to_string()))?;
        Ok(users.get(id).cloned())
    }
}
