use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use homebuyer_portal_api::config::{AppConfig, Environment};
use homebuyer_portal_api::database::DatabaseManager;
use homebuyer_portal_api::services::PgGateway;
use homebuyer_portal_api::{app, AppState};

#[derive(Parser)]
#[command(name = "homebuyer-portal-api")]
#[command(about = "Buyer/agent portal API server")]
#[command(version)]
struct Args {
    #[arg(long, help = "Bind address (overrides PORTAL_API_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Listen port (overrides PORTAL_API_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long = "env", help = "development, staging or production (overrides APP_ENV)")]
    environment: Option<Environment>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = AppConfig::load(args.environment).context("invalid configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let default_level = if config.is_development() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    tracing::info!("Starting Homebuyer Portal API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect_lazy(&config.database).context("failed to create database pool")?;
    let gateway = PgGateway::new(pool.clone(), &config.database);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::with_gateway(config, gateway);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Homebuyer Portal API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("Database pool closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
