//! In-memory `IdentityRepository` double for tests.

use crate::{
    application::ports::IdentityRepository,
    domain::{
        entities::*,
        errors::{DomainError, DomainResult},
    },
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock repository implementation for testing.
///
/// Records every create invocation and lets tests flip the provider into
/// failure modes: a non-success creation status, or wholesale lookup failure.
pub struct MockIdentityRepository {
    users: Mutex<HashMap<String, Vec<User>>>, // realm -> users
    roles: Mutex<HashMap<String, Vec<Role>>>, // user id -> roles
    groups: Mutex<HashMap<String, Vec<Group>>>, // user id -> groups
    create_calls: Mutex<Vec<(String, User, Option<Credential>)>>,
    create_status: Mutex<Option<u16>>,
    should_fail: Mutex<bool>,
    counter: Mutex<u32>,
}

impl MockIdentityRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            roles: Mutex::new(HashMap::new()),
            groups: Mutex::new(HashMap::new()),
            create_calls: Mutex::new(Vec::new()),
            create_status: Mutex::new(None),
            should_fail: Mutex::new(false),
            counter: Mutex::new(0),
        }
    }

    /// Seed a user under a realm. The user keeps the id it carries.
    pub fn with_user(self, realm: &str, user: User) -> Self {
        self.users
            .lock()
            .unwrap()
            .entry(realm.to_string())
            .or_default()
            .push(user);
        self
    }

    pub fn with_user_roles(self, user_id: &str, names: &[&str]) -> Self {
        self.roles.lock().unwrap().insert(
            user_id.to_string(),
            names.iter().map(|n| Role::named(*n)).collect(),
        );
        self
    }

    pub fn with_user_groups(self, user_id: &str, names: &[&str]) -> Self {
        self.groups.lock().unwrap().insert(
            user_id.to_string(),
            names.iter().map(|n| Group::named(*n)).collect(),
        );
        self
    }

    /// Make create answer with a non-success provider status.
    pub fn reject_creates_with_status(&self, status: u16) {
        *self.create_status.lock().unwrap() = Some(status);
    }

    /// Make every operation fail as if the provider were unreachable.
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Snapshot of recorded create invocations.
    pub fn create_calls(&self) -> Vec<(String, User, Option<Credential>)> {
        self.create_calls.lock().unwrap().clone()
    }

    fn check_should_fail(&self) -> DomainResult<()> {
        if *self.should_fail.lock().unwrap() {
            Err(DomainError::ExternalService {
                service: "mock-provider".to_string(),
                message: "mock failure enabled".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn generate_user_id(&self) -> String {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        format!("user-{counter}")
    }
}

impl Default for MockIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for MockIdentityRepository {
    async fn create_user(
        &self,
        realm: &str,
        user: &User,
        credential: Option<&Credential>,
    ) -> DomainResult<EntityId> {
        self.check_should_fail()?;

        self.create_calls.lock().unwrap().push((
            realm.to_string(),
            user.clone(),
            credential.cloned(),
        ));

        if let Some(status) = *self.create_status.lock().unwrap() {
            return Err(DomainError::provider_status(status, "user creation rejected"));
        }

        let user_id = self.generate_user_id();
        let mut created = user.clone();
        created.id = Some(EntityId::from_string(user_id.clone()));

        self.users
            .lock()
            .unwrap()
            .entry(realm.to_string())
            .or_default()
            .push(created);

        Ok(EntityId::from_string(user_id))
    }

    async fn find_user_by_id(&self, realm: &str, user_id: &str) -> DomainResult<User> {
        self.check_should_fail()?;

        let users = self.users.lock().unwrap();
        users
            .get(realm)
            .and_then(|realm_users| {
                realm_users
                    .iter()
                    .find(|u| u.id.as_ref().map(EntityId::as_str) == Some(user_id))
            })
            .cloned()
            .ok_or_else(|| DomainError::UserNotFound {
                user_id: user_id.to_string(),
                realm: realm.to_string(),
            })
    }

    async fn get_user_realm_roles(&self, _realm: &str, user_id: &str) -> DomainResult<Vec<Role>> {
        self.check_should_fail()?;
        Ok(self
            .roles
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_user_groups(&self, _realm: &str, user_id: &str) -> DomainResult<Vec<Group>> {
        self.check_should_fail()?;
        Ok(self
            .groups
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}
