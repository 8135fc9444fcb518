//! Token authentication against the IPLM API.
//!
//! The server issues a JWT through the `tokenAuth` mutation. The token is
//! then attached to every request as `Authorization: JWT <token>`.

use dialoguer::{Input, Password};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::graphql::{GraphQLClient, Transport, Variables, TOKEN_AUTH};

/// Username and password for `tokenAuth`.
#[derive(Debug)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub(crate) fn from_secret(username: String, password: SecretString) -> Self {
        Self { username, password }
    }

    /// Ask for username and password on the terminal. The password is not echoed.
    pub fn prompt() -> Result<Self> {
        let username: String = Input::new().with_prompt("Enter username").interact_text()?;
        let password = Password::new()
            .with_prompt(format!("Enter password for {}", username))
            .interact()?;
        Ok(Self::new(username, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Result of the `tokenAuth` mutation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAuth {
    pub token: String,
    #[serde(default)]
    pub payload: Option<Value>,
    #[serde(default)]
    pub refresh_expires_in: Option<i64>,
}

/// Exchange credentials for a token.
pub async fn get_token(transport: &dyn Transport, credentials: &Credentials) -> Result<TokenAuth> {
    let mut variables = Variables::new();
    variables.insert("username".into(), Value::String(credentials.username.clone()));
    variables.insert(
        "password".into(),
        Value::String(credentials.password.expose_secret().to_string()),
    );

    let mut data = transport.execute(TOKEN_AUTH, variables).await?;

    let token_auth = match data.remove("tokenAuth") {
        Some(value @ Value::Object(_)) => serde_json::from_value::<TokenAuth>(value)?,
        _ => {
            return Err(ClientError::UnexpectedResponse(
                "missing 'tokenAuth' in mutation result".into(),
            ))
        }
    };

    debug!(
        username = %credentials.username,
        refresh_expires_in = ?token_auth.refresh_expires_in,
        "Token issued"
    );
    Ok(token_auth)
}

/// Authenticate `client` and return it with the token attached.
///
/// Prompts on the terminal when `credentials` is `None`.
pub async fn authenticate(
    client: GraphQLClient,
    credentials: Option<Credentials>,
) -> Result<GraphQLClient> {
    let credentials = match credentials {
        Some(credentials) => credentials,
        None => Credentials::prompt()?,
    };

    let token_auth = get_token(&client, &credentials).await?;
    info!(
        endpoint = %client.endpoint(),
        username = %credentials.username,
        "Authenticated"
    );

    Ok(client.with_token(token_auth.token))
}

/// Build a client for `url` authenticated with `credentials`.
pub async fn authenticated_client(
    url: impl Into<String>,
    credentials: Option<Credentials>,
) -> Result<GraphQLClient> {
    authenticate(GraphQLClient::new(url), credentials).await
}
