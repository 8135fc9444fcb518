//! GraphQL client for making requests to the IPLM API server

use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use super::transport::{ResponseData, Transport, Variables};
use crate::error::{ClientError, Result};

/// Scheme used in the `Authorization` header, as expected by the server's
/// JWT middleware.
pub const AUTH_SCHEME: &str = "JWT";

/// Default endpoint of a local development server.
pub const DEFAULT_ENDPOINT: &str = "http://0.0.0.0:8000/graphql";

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a, V: Serialize> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub locations: Option<Vec<GraphQLErrorLocation>>,
    pub path: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLErrorLocation {
    pub line: i32,
    pub column: i32,
}

/// GraphQL client for making requests
#[derive(Clone)]
pub struct GraphQLClient {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
    timeout: Option<Duration>,
}

impl GraphQLClient {
    /// Create a new GraphQL client
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            auth_token: None,
            timeout: None,
        }
    }

    /// Create a client with authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Apply a timeout to every request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Execute a GraphQL query
    pub async fn query<V, R>(&self, query: &str, variables: Option<V>) -> Result<R>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest { query, variables };

        let mut req = self.client.post(&self.endpoint).json(&request);

        if let Some(token) = &self.auth_token {
            req = req.header(
                reqwest::header::AUTHORIZATION,
                format!("{} {}", AUTH_SCHEME, token),
            );
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "GraphQL endpoint returned an error status");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let graphql_response: GraphQLResponse<R> = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "GraphQL endpoint returned an unparseable body");
            ClientError::Serialization(e)
        })?;

        if let Some(errors) = graphql_response.errors {
            if !errors.is_empty() {
                let message = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(error_count = errors.len(), %message, "GraphQL errors in response");
                return Err(ClientError::GraphQL(message));
            }
        }

        graphql_response.data.ok_or(ClientError::NoData)
    }
}

#[async_trait]
impl Transport for GraphQLClient {
    async fn execute(&self, document: &str, variables: Variables) -> Result<ResponseData> {
        let variables = (!variables.is_empty()).then_some(variables);
        debug!(
            endpoint = %self.endpoint,
            has_variables = variables.is_some(),
            "Sending GraphQL document"
        );
        let data: ResponseData = self.query(document, variables).await?;
        debug!(fields = ?data.keys().collect::<Vec<_>>(), "GraphQL response received");
        Ok(data)
    }
}
