use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "orgward", about = "Role-based access control for organizations")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the role permission matrix
    Roles(commands::roles::RolesArgs),
    /// Check permissions for a role
    Check(commands::check::CheckArgs),
    /// Check a resource/action pair for a role
    Access(commands::access::AccessArgs),
    /// Check whether a role may manage another
    Manage(commands::manage::ManageArgs),
    /// Show the dashboard access summary for a role
    Summary(commands::summary::SummaryArgs),
    /// Run the guarded demo API
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Roles(args) => commands::roles::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Access(args) => commands::access::run(args),
        Commands::Manage(args) => commands::manage::run(args),
        Commands::Summary(args) => commands::summary::run(args),
        Commands::Serve(args) => commands::serve::run(args).await,
    }
}
