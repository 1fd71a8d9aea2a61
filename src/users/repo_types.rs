use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User record held by the storage shim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String, // not exposed in JSON
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

impl InsertUser {
    pub fn with_id(self, id: Uuid) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}
