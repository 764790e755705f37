use crate::config::Config;
use backend_domain::{
    application::services::UserManagementService,
    application::ports::IdentityRepository,
    infrastructure::adapters::{AdminCredentials, KeycloakRestAdapter},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_service: UserManagementService,
}

impl AppState {
    /// Wire the service against the real Keycloak admin REST API.
    pub async fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let adapter = KeycloakRestAdapter::connect(
            config.keycloak_url.clone(),
            AdminCredentials {
                auth_realm: config.keycloak_realm.clone(),
                client_id: config.keycloak_client_id.clone(),
                username: config.keycloak_username.clone(),
                password: config.keycloak_password.clone(),
            },
        )
        .await?;

        Ok(Self::with_repository(config.clone(), Arc::new(adapter)))
    }

    /// Wire the service against any repository implementation. Tests use this
    /// to substitute the provider with a double.
    pub fn with_repository(config: Config, repository: Arc<dyn IdentityRepository>) -> Self {
        Self {
            config,
            user_service: UserManagementService::new(repository),
        }
    }
}
