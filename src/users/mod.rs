//! User records and the store capability the strategies resolve against.
//! Used by: strategy, state, handlers.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What a strategy needs to know about a user record.
pub trait AuthUser: Clone + Send + Sync + 'static {
    fn id(&self) -> String;
    fn is_active(&self) -> bool;
}

/// Lookup capability provided by the user database.
///
/// `Ok(None)` means no such user; `Err` is reserved for infrastructure
/// failures and is never folded into an authentication rejection.
#[async_trait]
pub trait UserStore<U>: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<U>>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl AuthUser for User {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
