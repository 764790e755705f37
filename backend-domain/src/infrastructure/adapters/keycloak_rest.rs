use crate::{
    application::ports::IdentityRepository,
    domain::{
        entities::*,
        errors::{DomainError, DomainResult},
    },
};
use async_trait::async_trait;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Credentials used to obtain an admin token from the provider.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    /// Realm the admin account authenticates against (usually `master`).
    pub auth_realm: String,
    pub client_id: String,
    pub username: String,
    pub password: String,
}

/// `IdentityRepository` adapter speaking the Keycloak admin REST API.
///
/// Each port call is one HTTP round trip against `/admin/realms/{realm}/...`
/// with a bearer token obtained through the password grant. The adapter does
/// not retry and does not refresh the token on its own; callers can invoke
/// [`refresh_token`](Self::refresh_token) when the token has expired.
pub struct KeycloakRestAdapter {
    base_url: String,
    client: reqwest::Client,
    credentials: AdminCredentials,
    token: RwLock<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Wire form of a Keycloak user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: Option<String>,
    pub enabled: Option<bool>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<CredentialRepresentation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRepresentation {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
    pub temporary: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleRepresentation {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupRepresentation {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
}

impl From<UserRepresentation> for User {
    fn from(rep: UserRepresentation) -> Self {
        Self {
            id: rep.id.map(EntityId::from_string),
            username: rep.username.unwrap_or_default(),
            email: rep.email,
            first_name: rep.first_name,
            last_name: rep.last_name,
            enabled: rep.enabled.unwrap_or(true),
            created_timestamp: rep
                .created_timestamp
                .and_then(DateTime::from_timestamp_millis),
        }
    }
}

impl From<RoleRepresentation> for Role {
    fn from(rep: RoleRepresentation) -> Self {
        Self {
            id: rep.id.map(EntityId::from_string),
            name: rep.name.unwrap_or_default(),
            description: rep.description,
        }
    }
}

impl From<GroupRepresentation> for Group {
    fn from(rep: GroupRepresentation) -> Self {
        Self {
            id: rep.id.map(EntityId::from_string),
            name: rep.name.unwrap_or_default(),
            path: rep.path,
        }
    }
}

fn to_representation(user: &User, credential: Option<&Credential>) -> UserRepresentation {
    UserRepresentation {
        id: None,
        username: Some(user.username.clone()),
        enabled: Some(user.enabled),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        created_timestamp: None,
        credentials: credential.map(|c| {
            vec![CredentialRepresentation {
                type_: c.type_.clone(),
                value: c.value.clone(),
                temporary: c.temporary,
            }]
        }),
    }
}

impl KeycloakRestAdapter {
    /// Acquire an admin token and return a ready adapter.
    pub async fn connect(
        base_url: impl Into<String>,
        credentials: AdminCredentials,
    ) -> DomainResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::new();
        let token = Self::acquire_token(&client, &base_url, &credentials).await?;

        info!("Acquired admin token for realm '{}'", credentials.auth_realm);
        Ok(Self {
            base_url,
            client,
            credentials,
            token: RwLock::new(token),
        })
    }

    async fn acquire_token(
        client: &reqwest::Client,
        base_url: &str,
        credentials: &AdminCredentials,
    ) -> DomainResult<String> {
        let url = format!(
            "{base_url}/realms/{}/protocol/openid-connect/token",
            credentials.auth_realm
        );
        let response = client
            .post(&url)
            .form(&[
                ("grant_type", "password"),
                ("client_id", credentials.client_id.as_str()),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::provider_status(
                status.as_u16(),
                "admin token acquisition rejected",
            ));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Serialization {
                message: format!("malformed token response: {e}"),
            })?;
        Ok(token.access_token)
    }

    /// Re-run the password grant and replace the cached token.
    pub async fn refresh_token(&self) -> DomainResult<()> {
        let token = Self::acquire_token(&self.client, &self.base_url, &self.credentials).await?;
        *self.token.write().await = token;
        Ok(())
    }

    fn admin_url(&self, realm: &str, path: &str) -> String {
        format!("{}/admin/realms/{realm}{path}", self.base_url)
    }

    async fn get(&self, url: &str) -> DomainResult<reqwest::Response> {
        let token = self.token.read().await;
        self.client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("request to {url} failed: {e}")))
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> DomainResult<T> {
        response.json().await.map_err(|e| DomainError::Serialization {
            message: format!("malformed provider response: {e}"),
        })
    }
}

#[async_trait]
impl IdentityRepository for KeycloakRestAdapter {
    async fn create_user(
        &self,
        realm: &str,
        user: &User,
        credential: Option<&Credential>,
    ) -> DomainResult<EntityId> {
        let url = self.admin_url(realm, "/users");
        let body = to_representation(user, credential);

        debug!("POST {url}");
        let token = self.token.read().await;
        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("create user request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(DomainError::provider_status(
                status.as_u16(),
                format!("user creation rejected: {text}"),
            ));
        }

        // Keycloak answers 201 with the new resource in the Location header.
        let id = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|loc| loc.to_str().ok())
            .and_then(|loc| loc.rsplit('/').next())
            .map(str::to_string)
            .ok_or_else(|| {
                DomainError::provider("user created but no Location header returned")
            })?;

        Ok(EntityId::from_string(id))
    }

    async fn find_user_by_id(&self, realm: &str, user_id: &str) -> DomainResult<User> {
        let url = self.admin_url(realm, &format!("/users/{user_id}"));
        let response = self.get(&url).await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::UserNotFound {
                user_id: user_id.to_string(),
                realm: realm.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DomainError::provider_status(
                status.as_u16(),
                "user lookup failed",
            ));
        }

        let rep: UserRepresentation = Self::read_json(response).await?;
        Ok(rep.into())
    }

    async fn get_user_realm_roles(&self, realm: &str, user_id: &str) -> DomainResult<Vec<Role>> {
        let url = self.admin_url(realm, &format!("/users/{user_id}/role-mappings/realm"));
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::provider_status(
                status.as_u16(),
                "role mapping lookup failed",
            ));
        }

        let reps: Vec<RoleRepresentation> = Self::read_json(response).await?;
        Ok(reps.into_iter().map(Role::from).collect())
    }

    async fn get_user_groups(&self, realm: &str, user_id: &str) -> DomainResult<Vec<Group>> {
        let url = self.admin_url(realm, &format!("/users/{user_id}/groups"));
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::provider_status(
                status.as_u16(),
                "group membership lookup failed",
            ));
        }

        let reps: Vec<GroupRepresentation> = Self::read_json(response).await?;
        Ok(reps.into_iter().map(Group::from).collect())
    }
}
