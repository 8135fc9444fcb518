use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use secrecy::SecretString;

use crate::auth::{authenticate, Credentials};
use crate::error::{ClientError, Result};
use crate::graphql::{GraphQLClient, DEFAULT_ENDPOINT};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables
#[derive(Debug)]
pub struct ClientConfig {
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs = match lookup("IPLM_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                ClientError::Config(format!("IPLM_TIMEOUT_SECS must be a number, got '{}'", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint: lookup("IPLM_GRAPHQL_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            username: lookup("IPLM_USERNAME"),
            password: lookup("IPLM_PASSWORD").map(SecretString::from),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Override the endpoint (e.g. from a command line flag)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// An unauthenticated client for the configured endpoint
    pub fn client(&self) -> GraphQLClient {
        GraphQLClient::new(self.endpoint.clone()).with_timeout(self.timeout)
    }

    /// Authenticate and return a client carrying the token.
    ///
    /// Prompts for credentials unless both username and password are configured.
    pub async fn connect(self) -> Result<GraphQLClient> {
        let client = self.client();
        let credentials = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(Credentials::from_secret(username, password)),
            _ => None,
        };
        authenticate(client, credentials).await
    }
}
