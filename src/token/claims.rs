//! Claims carried inside an access token.
//! Used by: token::sign, token::verify, strategy::jwt.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const USER_ID: &str = "user_id";
pub const EXP: &str = "exp";

/// Free-form claim set. Issued tokens always carry `user_id` and `exp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: impl Into<String>) -> Self {
        let mut claims = Self::new();
        claims.insert(USER_ID, user_id.into());
        claims
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Integer ids issued by other producers are accepted and rendered as strings.
    pub fn user_id(&self) -> Option<String> {
        match self.0.get(USER_ID)? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) if id.is_i64() || id.is_u64() => Some(id.to_string()),
            _ => None,
        }
    }

    /// Expiry as seconds since the Unix epoch.
    pub fn exp(&self) -> Option<i64> {
        let exp = self.0.get(EXP)?;
        exp.as_i64().or_else(|| exp.as_f64().map(|secs| secs.floor() as i64))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}
