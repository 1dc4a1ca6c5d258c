//! Run the guarded demo API
//!
//! Memberships come from the `[[memberships]]` tables of the merged config
//! and guard settings from `[guard]`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use orgward_core::StaticMembershipResolver;
use orgward_server::{AppState, OrgwardServer, ServerConfig};
use tracing::info;

use crate::config::{ConfigLoader, OrgwardConfig};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Config file layered over user and project config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = ConfigLoader::load(args.config.as_deref())?;
    let (server_config, state) = build(&args, config);

    info!(
        "Starting orgward server on {}:{}",
        server_config.host, server_config.port
    );
    OrgwardServer::new(server_config, state).run().await?;
    Ok(())
}

/// Apply flag overrides and assemble server state
fn build(args: &ServeArgs, config: OrgwardConfig) -> (ServerConfig, AppState) {
    let server_config = ServerConfig::new(
        args.host.clone().unwrap_or(config.server.host),
        args.port.unwrap_or(config.server.port),
    );

    info!(memberships = config.memberships.len(), "Loaded memberships");
    let resolver = StaticMembershipResolver::from_entries(config.memberships);
    let state = AppState::new(Arc::new(resolver), config.guard);

    (server_config, state)
}
