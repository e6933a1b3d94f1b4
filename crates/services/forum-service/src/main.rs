//! Forum Service - HTTP server for answers, admin and profiles.

use clap::{Parser, Subcommand};

use forum_service_lib::config::ForumServiceConfig;
use forum_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "forum-service")]
#[command(about = "Forum answers, administration and profiles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides FORUM_SERVICE_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides FORUM_SERVICE_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = ForumServiceConfig::from_env();
    forum_service_lib::init_tracing(&config.service.log_level);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            forum_service_lib::run_server(config).await?;
        }
        Commands::Migrate { action } => {
            forum_service_lib::run_migrations(&config.database, action).await?;
        }
    }

    Ok(())
}
