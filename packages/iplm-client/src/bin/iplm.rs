//! Command line access to the IPLM organization API
//!
//! Prints results as JSON on stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iplm_client::{
    get_organization_types, get_organizations, update_organization, update_organization_type,
    ClientConfig, Entity, Organization, OrganizationType, Updated,
};
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "iplm")]
#[command(about = "IPLM GraphQL client")]
struct Cli {
    /// GraphQL endpoint (overrides IPLM_GRAPHQL_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Organizations
    #[command(subcommand)]
    Organizations(OrganizationCommands),

    /// Organization types
    #[command(subcommand)]
    OrganizationTypes(OrganizationTypeCommands),
}

#[derive(Subcommand)]
enum OrganizationCommands {
    /// List all organizations
    List,

    /// Update an organization
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum OrganizationTypeCommands {
    /// List all organization types
    List,

    /// Create or update an organization type
    Update {
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,iplm_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(url) = cli.url {
        config = config.with_endpoint(url);
    }
    let client = config.connect().await.context("Failed to authenticate")?;

    let output = match cli.command {
        Commands::Organizations(OrganizationCommands::List) => {
            let orgs = get_organizations(&client)
                .await
                .context("Failed to list organizations")?;
            wire_list(&orgs)
        }
        Commands::Organizations(OrganizationCommands::Update {
            id,
            name,
            description,
        }) => {
            let mut org = Organization::new().with_id(id);
            if let Some(name) = name {
                org = org.with_name(name);
            }
            if let Some(description) = description {
                org = org.with_description(description);
            }
            let updated = update_organization(&client, &org)
                .await
                .context("Failed to update organization")?;
            wire_update(&updated)
        }
        Commands::OrganizationTypes(OrganizationTypeCommands::List) => {
            let org_types = get_organization_types(&client)
                .await
                .context("Failed to list organization types")?;
            wire_list(&org_types)
        }
        Commands::OrganizationTypes(OrganizationTypeCommands::Update {
            id,
            name,
            description,
        }) => {
            let mut org_type = OrganizationType::new().with_name(name);
            if let Some(id) = id {
                org_type = org_type.with_id(id);
            }
            if let Some(description) = description {
                org_type = org_type.with_description(description);
            }
            let updated = update_organization_type(&client, &org_type)
                .await
                .context("Failed to update organization type")?;
            wire_update(&updated)
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render output")?
    );
    Ok(())
}

fn wire_list<T: Entity>(entities: &[T]) -> Value {
    Value::Array(
        entities
            .iter()
            .map(|entity| Value::Object(entity.to_wire()))
            .collect(),
    )
}

fn wire_update<T: Entity>(updated: &Updated<T>) -> Value {
    json!({
        "entity": Value::Object(updated.entity.to_wire()),
        "applied": updated.is_applied(),
    })
}
