use crate::domain::{entities::*, errors::DomainResult};
use async_trait::async_trait;

/// Port describing the slice of the identity provider's administration API
/// the facade depends on. Deliberately narrow (create-user, get-user,
/// list-roles, list-groups) so the provider can be swapped for a test double.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Create a user in the realm, optionally attaching an initial credential.
    /// Returns the provider-assigned id.
    async fn create_user(
        &self,
        realm: &str,
        user: &User,
        credential: Option<&Credential>,
    ) -> DomainResult<EntityId>;

    async fn find_user_by_id(&self, realm: &str, user_id: &str) -> DomainResult<User>;

    async fn get_user_realm_roles(&self, realm: &str, user_id: &str) -> DomainResult<Vec<Role>>;

    async fn get_user_groups(&self, realm: &str, user_id: &str) -> DomainResult<Vec<Group>>;
}
