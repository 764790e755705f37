use super::common::EntityId;
use super::{Group, Role};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Messages surfaced to API clients on validation failure. The create-user
/// contract reports the username constraint under the field key "name".
pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email format";

/// Domain entity representing a provider-managed user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<EntityId>,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: bool,
    pub created_timestamp: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: String) -> DomainResult<Self> {
        Self::validate_username(&username)?;

        Ok(Self {
            id: None,
            username,
            email: None,
            first_name: None,
            last_name: None,
            enabled: true,
            created_timestamp: None,
        })
    }

    pub fn validate_username(username: &str) -> DomainResult<()> {
        if username.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "name".to_string(),
                message: NAME_REQUIRED.to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> DomainResult<()> {
        let invalid = || DomainError::Validation {
            field: "email".to_string(),
            message: INVALID_EMAIL.to_string(),
        };

        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(invalid());
        }
        // The domain part needs at least one dot with text on both sides.
        let domain = parts[1];
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid());
        }
        Ok(())
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }
}

/// Password (or other) credential passed to the provider on user creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub type_: String,
    pub value: String,
    pub temporary: bool,
}

impl Credential {
    pub fn password(value: String, temporary: bool) -> Self {
        Self {
            type_: "password".to_string(),
            value,
            temporary,
        }
    }
}

/// Request to create a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateUserRequest {
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            username,
            email,
            password,
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_name(mut self, first_name: String, last_name: String) -> Self {
        self.first_name = Some(first_name);
        self.last_name = Some(last_name);
        self
    }

    /// Fail on the first violated constraint.
    pub fn validate(&self) -> DomainResult<()> {
        User::validate_username(&self.username)?;
        User::validate_email(&self.email)?;
        Ok(())
    }

    /// Collect every violated constraint as a field -> message map, the shape
    /// the HTTP layer reports on 400.
    pub fn validation_errors(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        for result in [
            User::validate_username(&self.username),
            User::validate_email(&self.email),
        ] {
            if let Err(DomainError::Validation { field, message }) = result {
                errors.insert(field, message);
            }
        }
        errors
    }

    pub fn to_domain_user(&self) -> DomainResult<User> {
        self.validate()?;

        let mut user = User::new(self.username.clone())?;
        user.email = Some(self.email.clone());
        user.first_name = self.first_name.clone();
        user.last_name = self.last_name.clone();
        Ok(user)
    }

    pub fn credential(&self) -> Credential {
        Credential::password(self.password.clone(), false)
    }
}

/// A user together with the realm roles and groups resolved for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: User,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
}

impl UserProfile {
    pub fn new(user: User, roles: Vec<Role>, groups: Vec<Group>) -> Self {
        Self {
            user,
            roles: roles.into_iter().map(|r| r.name).collect(),
            groups: groups.into_iter().map(|g| g.name).collect(),
        }
    }
}
