use backend_domain::domain::entities::*;
use backend_domain::domain::errors::DomainError;

#[test]
fn test_valid_username_passes() {
    assert!(User::validate_username("chupakabra").is_ok());
}

#[test]
fn test_empty_username_is_rejected() {
    let err = User::validate_username("").unwrap_err();
    match err {
        DomainError::Validation { field, message } => {
            assert_eq!(field, "name");
            assert_eq!(message, NAME_REQUIRED);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_whitespace_username_is_rejected() {
    assert!(User::validate_username("   ").is_err());
}

#[test]
fn test_valid_email_passes() {
    assert!(User::validate_email("chupakabra@gmail.com").is_ok());
}

#[test]
fn test_malformed_emails_are_rejected() {
    for email in ["", "no-at-sign", "@gmail.com", "user@", "user@nodot", "user@.com"] {
        let err = User::validate_email(email).unwrap_err();
        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, INVALID_EMAIL);
            }
            other => panic!("unexpected error for {email}: {other:?}"),
        }
    }
}

#[test]
fn test_validation_errors_collects_all_fields() {
    let request = CreateUserRequest::new(
        "".to_string(),
        "not-an-email".to_string(),
        "password".to_string(),
    );

    let errors = request.validation_errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("name").map(String::as_str), Some(NAME_REQUIRED));
    assert_eq!(errors.get("email").map(String::as_str), Some(INVALID_EMAIL));
}

#[test]
fn test_validation_errors_empty_for_valid_request() {
    let request = CreateUserRequest::new(
        "chupakabra".to_string(),
        "chupakabra@gmail.com".to_string(),
        "password".to_string(),
    );
    assert!(request.validation_errors().is_empty());
}

#[test]
fn test_to_domain_user_carries_request_fields() {
    let request = CreateUserRequest::new(
        "chupakabra".to_string(),
        "chupakabra@gmail.com".to_string(),
        "password".to_string(),
    )
    .with_name("Vladimir".to_string(), "Vexov".to_string());

    let user = request.to_domain_user().unwrap();
    assert_eq!(user.username, "chupakabra");
    assert_eq!(user.email.as_deref(), Some("chupakabra@gmail.com"));
    assert_eq!(user.first_name.as_deref(), Some("Vladimir"));
    assert_eq!(user.last_name.as_deref(), Some("Vexov"));
    assert!(user.enabled);
    assert!(user.id.is_none());
}

#[test]
fn test_to_domain_user_rejects_invalid_request() {
    let request = CreateUserRequest::new(
        "".to_string(),
        "chupakabra@gmail.com".to_string(),
        "password".to_string(),
    );
    assert!(request.to_domain_user().is_err());
}

#[test]
fn test_request_credential_is_permanent_password() {
    let request = CreateUserRequest::new(
        "chupakabra".to_string(),
        "chupakabra@gmail.com".to_string(),
        "s3cret".to_string(),
    );

    let credential = request.credential();
    assert_eq!(credential.type_, "password");
    assert_eq!(credential.value, "s3cret");
    assert!(!credential.temporary);
}

#[test]
fn test_display_name_falls_back_to_username() {
    let user = User::new("solo".to_string()).unwrap();
    assert_eq!(user.display_name(), "solo");

    let mut named = user.clone();
    named.first_name = Some("Han".to_string());
    named.last_name = Some("Solo".to_string());
    assert_eq!(named.display_name(), "Han Solo");
}

#[test]
fn test_user_profile_flattens_role_and_group_names() {
    let user = User::new("chupakabra".to_string()).unwrap();
    let roles = vec![Role::named("MODERATOR"), Role::named("USER")];
    let groups = vec![Group::named("Moderators")];

    let profile = UserProfile::new(user, roles, groups);
    assert_eq!(profile.roles, vec!["MODERATOR", "USER"]);
    assert_eq!(profile.groups, vec!["Moderators"]);
}
