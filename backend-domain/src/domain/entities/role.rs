use super::common::EntityId;
use serde::{Deserialize, Serialize};

/// Realm-level role as reported by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Option<EntityId>,
    pub name: String,
    pub description: Option<String>,
}

impl Role {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
        }
    }
}
