/*!
# Backend Domain

Domain layer for the user-administration facade, following hexagonal
architecture principles.

This crate provides:
- Domain models for provider-managed users (`User`, `Role`, `Group`)
- The `IdentityRepository` port describing the narrow slice of the
  identity provider's admin API the facade depends on
- `UserManagementService` implementing the facade's use cases
- A Keycloak admin REST adapter for the port

## Features

- `testing`: in-memory `MockIdentityRepository` so the port can be
  substituted with a test double.
*/

pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(feature = "testing")]
pub mod testing;

pub use application::ports::*;
pub use application::services::*;
pub use domain::entities::*;
pub use domain::errors::*;
