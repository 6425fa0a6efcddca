//! Account registration backend.
//!
//! The [`domain`] module holds the registration workflow and its ports;
//! [`inbound`] and [`outbound`] hold the adapters around it.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
