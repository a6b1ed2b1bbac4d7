use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{DatabaseConnection, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    tracing::info!(database_url = %config.database_url, "connecting to database");
    let db = DatabaseConnection::connect(&config.database_url, config.max_connections).await?;
    db.run_migrations().await?;

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    todo_server::run(listener, db.clone()).await?;

    db.close().await;
    tracing::info!("server shut down");
    Ok(())
}
