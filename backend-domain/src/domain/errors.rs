use thiserror::Error;

/// Domain-specific errors for facade operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {user_id} in realm {realm}")]
    UserNotFound { user_id: String, realm: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DomainError {
    /// Provider-side failure, tagged with the HTTP status the provider
    /// answered with when one was observed.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: "keycloak".to_string(),
            message: message.into(),
        }
    }

    pub fn provider_status(status: u16, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: "keycloak".to_string(),
            message: format!("{} (status {status})", message.into()),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
