use backend_domain::domain::entities::{CreateUserRequest, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound create-user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserRequest {
    pub fn to_domain(&self) -> CreateUserRequest {
        CreateUserRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    /// Static constraint check; an empty map means the payload is valid.
    pub fn validation_errors(&self) -> HashMap<String, String> {
        self.to_domain().validation_errors()
    }
}

/// Outbound user payload built from the provider's representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            first_name: profile.user.first_name,
            last_name: profile.user.last_name,
            email: profile.user.email,
            roles: profile.roles,
            groups: profile.groups,
        }
    }
}
