//! Tasking HTTP Server Binary
//!
//! Main entry point for the sensor tasking REST API server. It loads the
//! platform configuration, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the built-in development platform
//! cargo run --bin tasking-server
//!
//! # Run with a platform configuration file
//! TASKING_CONFIG=platform.toml cargo run --bin tasking-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `TASKING_CONFIG`: Path to the platform TOML file (default: built-in dev platform)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sensor_tasking::config::PlatformConfig;
use sensor_tasking::http::{create_router, AppState};
use sensor_tasking::queue::{LocalQueue, TaskingQueue};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting sensor tasking server");

    // Freeze the platform limits once at startup
    let config = match env::var("TASKING_CONFIG") {
        Ok(path) => PlatformConfig::from_file(&path)?,
        Err(_) => {
            info!("TASKING_CONFIG not set, using built-in development platform");
            PlatformConfig::default_dev()
        }
    };
    let platform = config.observatory_limits();
    info!(
        "Platform capabilities: optical={}, rf={}, pointing={}",
        platform.eo_limits.is_some(),
        platform.rf_limits.is_some(),
        platform.pointing_limits.is_some(),
    );

    // Create application state
    let queue = Arc::new(LocalQueue::new()) as Arc<dyn TaskingQueue>;
    let state = AppState::new(queue, platform);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
