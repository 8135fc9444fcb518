//! The seam between entity operations and the network.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;

/// Variables sent with a document, keyed by variable name.
pub type Variables = Map<String, Value>;

/// The `data` object of a successful GraphQL response.
pub type ResponseData = Map<String, Value>;

/// Anything that can execute a GraphQL document.
///
/// Implementations perform exactly one round trip per call and surface
/// network, HTTP and GraphQL-level failures as errors. [`GraphQLClient`]
/// is the HTTP implementation.
///
/// [`GraphQLClient`]: crate::graphql::GraphQLClient
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, document: &str, variables: Variables) -> Result<ResponseData>;
}
