//! GraphQL client for the IPLM organization API.
//!
//! Authenticates with a JWT, lists and updates organizations and organization
//! types, and maps GraphQL payloads to typed entities through a schema-driven
//! mapper.
//!
//! # Example
//!
//! ```rust,ignore
//! use iplm_client::{authenticated_client, get_organization_types, Credentials};
//!
//! let client = authenticated_client(
//!     "http://0.0.0.0:8000/graphql",
//!     Some(Credentials::new("admin", "secret")),
//! )
//! .await?;
//!
//! for org_type in get_organization_types(&client).await? {
//!     println!("{}", org_type.name().unwrap_or("(unnamed)"));
//! }
//! ```

pub mod auth;
pub mod case;
pub mod config;
pub mod entity;
pub mod error;
pub mod graphql;
pub mod mapper;

pub use auth::{authenticate, authenticated_client, get_token, Credentials, TokenAuth};
pub use config::ClientConfig;
pub use entity::{
    get_organization_types, get_organizations, update_organization, update_organization_type,
    Address, Entity, NameMismatch, Organization, OrganizationType, Resource, Updated,
};
pub use error::{ClientError, Result};
pub use graphql::{GraphQLClient, Transport};
pub use mapper::{Decoded, FieldKind, FieldSpec, FieldValue, Record, Schema};
