//! Carry server entry point.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carry_market::GatewayConfig;
use carry_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,carry=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Carry Analytics Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/carry.toml".to_string());

    let mut config = if std::path::Path::new(&config_path).exists() {
        info!("loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("using default configuration");
        ServerConfig { market: GatewayConfig::from_env(), ..ServerConfig::default() }
    };

    // Deployment platforms inject the listen port via PORT.
    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        config.port = port;
    }

    let server = Server::new(config)?;
    server.start().await?;

    Ok(())
}
