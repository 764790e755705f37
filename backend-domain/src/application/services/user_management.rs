use crate::{
    application::ports::IdentityRepository,
    domain::{entities::*, errors::DomainResult},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// User management service implementing the facade's use cases. Every
/// operation is a single synchronous passthrough to the provider port;
/// there are no retries and no state kept between requests.
#[derive(Clone)]
pub struct UserManagementService {
    repository: Arc<dyn IdentityRepository>,
}

impl UserManagementService {
    pub fn new(repository: Arc<dyn IdentityRepository>) -> Self {
        Self { repository }
    }

    /// Create a new user with the password from the request as a
    /// non-temporary credential.
    #[instrument(skip(self, request), fields(realm = %realm, username = %request.username))]
    pub async fn create_user(
        &self,
        realm: &str,
        request: &CreateUserRequest,
    ) -> DomainResult<EntityId> {
        request.validate()?;

        let user = request.to_domain_user()?;
        let credential = request.credential();

        let user_id = self
            .repository
            .create_user(realm, &user, Some(&credential))
            .await?;

        info!(
            "Created user '{}' with ID '{}' in realm '{}'",
            request.username, user_id, realm
        );
        Ok(user_id)
    }

    /// Resolve a user by id together with its realm roles and groups.
    #[instrument(skip(self), fields(realm = %realm, user_id = %user_id))]
    pub async fn get_user_profile(&self, realm: &str, user_id: &str) -> DomainResult<UserProfile> {
        let user = self.repository.find_user_by_id(realm, user_id).await?;
        let roles = self.repository.get_user_realm_roles(realm, user_id).await?;
        let groups = self.repository.get_user_groups(realm, user_id).await?;

        info!(
            "Resolved user '{}' with {} roles and {} groups",
            user.username,
            roles.len(),
            groups.len()
        );
        Ok(UserProfile::new(user, roles, groups))
    }

    /// Realm role names assigned to a user.
    #[instrument(skip(self), fields(realm = %realm, user_id = %user_id))]
    pub async fn get_user_roles(&self, realm: &str, user_id: &str) -> DomainResult<Vec<String>> {
        let roles = self.repository.get_user_realm_roles(realm, user_id).await?;
        Ok(roles.into_iter().map(|r| r.name).collect())
    }

    /// Group names the user is a member of.
    #[instrument(skip(self), fields(realm = %realm, user_id = %user_id))]
    pub async fn get_user_groups(&self, realm: &str, user_id: &str) -> DomainResult<Vec<String>> {
        let groups = self.repository.get_user_groups(realm, user_id).await?;
        Ok(groups.into_iter().map(|g| g.name).collect())
    }
}
