use super::common::EntityId;
use serde::{Deserialize, Serialize};

/// Group membership entry as reported by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<EntityId>,
    pub name: String,
    pub path: Option<String>,
}

impl Group {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            path: None,
        }
    }
}
