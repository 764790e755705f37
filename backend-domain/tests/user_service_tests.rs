use backend_domain::application::services::UserManagementService;
use backend_domain::domain::entities::*;
use backend_domain::domain::errors::DomainError;
use backend_domain::testing::MockIdentityRepository;
use std::sync::Arc;

const REALM: &str = "itm";

fn valid_request() -> CreateUserRequest {
    CreateUserRequest::new(
        "chupakabra".to_string(),
        "chupakabra@gmail.com".to_string(),
        "password".to_string(),
    )
    .with_name("Vladimir".to_string(), "Vexov".to_string())
}

fn seeded_user(id: &str) -> User {
    let mut user = User::new("chupakabra".to_string()).unwrap();
    user.id = Some(EntityId::from(id));
    user.email = Some("chupakabra@gmail.com".to_string());
    user.first_name = Some("Vladimir".to_string());
    user.last_name = Some("Vexov".to_string());
    user
}

#[tokio::test]
async fn test_create_user_invokes_provider_once() {
    let repo = Arc::new(MockIdentityRepository::new());
    let service = UserManagementService::new(repo.clone());

    let user_id = service.create_user(REALM, &valid_request()).await.unwrap();
    assert!(!user_id.as_str().is_empty());

    let calls = repo.create_calls();
    assert_eq!(calls.len(), 1);

    let (realm, user, credential) = &calls[0];
    assert_eq!(realm, REALM);
    assert_eq!(user.username, "chupakabra");
    assert_eq!(user.email.as_deref(), Some("chupakabra@gmail.com"));
    assert_eq!(credential.as_ref().unwrap().value, "password");
}

#[tokio::test]
async fn test_create_user_rejects_invalid_request_before_dispatch() {
    let repo = Arc::new(MockIdentityRepository::new());
    let service = UserManagementService::new(repo.clone());

    let mut request = valid_request();
    request.username = String::new();

    let err = service.create_user(REALM, &request).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    // Nothing must reach the provider on invalid input.
    assert!(repo.create_calls().is_empty());
}

#[tokio::test]
async fn test_create_user_surfaces_provider_rejection() {
    let repo = Arc::new(MockIdentityRepository::new());
    repo.reject_creates_with_status(500);
    let service = UserManagementService::new(repo.clone());

    let err = service.create_user(REALM, &valid_request()).await.unwrap_err();
    assert!(matches!(err, DomainError::ExternalService { .. }));
    assert_eq!(repo.create_calls().len(), 1);
}

#[tokio::test]
async fn test_get_user_profile_composes_roles_and_groups() {
    let repo = Arc::new(
        MockIdentityRepository::new()
            .with_user(REALM, seeded_user("user-7"))
            .with_user_roles("user-7", &["MODERATOR", "USER"])
            .with_user_groups("user-7", &["Moderators"]),
    );
    let service = UserManagementService::new(repo);

    let profile = service.get_user_profile(REALM, "user-7").await.unwrap();
    assert_eq!(profile.user.username, "chupakabra");
    assert_eq!(profile.user.email.as_deref(), Some("chupakabra@gmail.com"));
    assert_eq!(profile.roles, vec!["MODERATOR", "USER"]);
    assert_eq!(profile.groups, vec!["Moderators"]);
}

#[tokio::test]
async fn test_get_user_profile_unknown_id_is_not_found() {
    let repo = Arc::new(MockIdentityRepository::new());
    let service = UserManagementService::new(repo);

    let err = service.get_user_profile(REALM, "missing").await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound { .. }));
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let repo = Arc::new(MockIdentityRepository::new().with_user(REALM, seeded_user("user-1")));
    repo.set_should_fail(true);
    let service = UserManagementService::new(repo);

    let err = service.get_user_profile(REALM, "user-1").await.unwrap_err();
    assert!(matches!(err, DomainError::ExternalService { .. }));
}

#[tokio::test]
async fn test_role_and_group_lookups_return_names() {
    let repo = Arc::new(
        MockIdentityRepository::new()
            .with_user_roles("user-3", &["USER"])
            .with_user_groups("user-3", &["Developers", "Moderators"]),
    );
    let service = UserManagementService::new(repo);

    assert_eq!(service.get_user_roles(REALM, "user-3").await.unwrap(), vec!["USER"]);
    assert_eq!(
        service.get_user_groups(REALM, "user-3").await.unwrap(),
        vec!["Developers", "Moderators"]
    );
}

#[tokio::test]
async fn test_read_paths_are_idempotent() {
    let repo = Arc::new(
        MockIdentityRepository::new()
            .with_user(REALM, seeded_user("user-9"))
            .with_user_roles("user-9", &["USER"]),
    );
    let service = UserManagementService::new(repo);

    let first = service.get_user_profile(REALM, "user-9").await.unwrap();
    let second = service.get_user_profile(REALM, "user-9").await.unwrap();
    assert_eq!(first.user.username, second.user.username);
    assert_eq!(first.roles, second.roles);
    assert_eq!(first.groups, second.groups);
}
