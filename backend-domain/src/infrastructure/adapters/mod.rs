pub mod keycloak_rest;

pub use keycloak_rest::*;
