// src/main.rs
// Aura - persona companion API backend

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use aura::config::{AuraConfig, Overrides, ServerConfig};
use aura::persona::Persona;
use aura::web::{self, state::AppState};

#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "Persona companion API backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    server: ServerArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server (default)
    Serve,

    /// Print the resolved server configuration
    Config,

    /// Print the persona served before one is stored
    DefaultPersona,
}

/// Accepted before or after the subcommand
#[derive(Args, Clone, Default, Debug, PartialEq, Eq)]
struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "AURA_HOST", global = true)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "AURA_PORT", global = true)]
    port: Option<u16>,

    /// Allowed CORS origin ("*" for any)
    #[arg(long, env = "AURA_CORS_ORIGIN", global = true)]
    cors_origin: Option<String>,
}

impl From<ServerArgs> for Overrides {
    fn from(args: ServerArgs) -> Self {
        Overrides {
            host: args.host,
            port: args.port,
            cors_origin: args.cors_origin,
        }
    }
}

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

async fn run_server(config: ServerConfig) -> Result<()> {
    let state = AppState::new();
    let app = web::create_router(state, &config)?;

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Aura API listening on http://{}", bind_address);
    match config.cors_origin.as_deref() {
        Some(origin) => info!(origin, "CORS restricted"),
        None => info!("CORS open to any origin"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

fn load_dotenv() {
    let env_path = Some(AuraConfig::config_dir().join(".env")).filter(|p| p.exists());
    if let Some(path) = env_path {
        let _ = dotenvy::from_path(&path);
    } else {
        let _ = dotenvy::dotenv();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed args
    load_dotenv();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::resolve(cli.server.into(), &AuraConfig::load());

    match cli.command {
        None | Some(Commands::Serve) => run_server(config).await,
        Some(Commands::Config) => {
            print!("{}", toml::to_string(&config)?);
            Ok(())
        }
        Some(Commands::DefaultPersona) => {
            println!("{}", serde_json::to_string_pretty(&Persona::default_persona())?);
            Ok(())
        }
    }
}
