//! Web server for the marketplace admin dashboard
#![forbid(unsafe_code)]

use market_web::build_app;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get configuration
    let config = market_core::Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        market_core::Config::default()
    });

    // Initialize tracing
    let json = config.logging.format == "json";
    if let Err(e) = market_core::init_logging(&config.logging.level, json) {
        eprintln!("Failed to initialize logging: {e}");
    }

    // Build the application with configuration
    let app = build_app(config.clone())?;

    let host: IpAddr = config
        .webserver
        .host
        .parse()
        .map_err(|e| format!("Invalid web server host '{}': {e}", config.webserver.host))?;
    let addr = SocketAddr::new(host, config.webserver.port);

    info!("Starting marketplace admin dashboard on {addr}");
    warn!(
        backend = %config.backend.base_url,
        "all entity data is proxied from the backend API"
    );

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
