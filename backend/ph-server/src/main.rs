use ph_server::{AppState, build_router, logger, sweeper};

use std::error::Error;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up PH_* overrides from a local .env, if any
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ph_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ph-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = ph_db::connect(&database_path).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    ph_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let app_state = AppState::from_config(pool, &config)?;

    let sweeper = sweeper::spawn(
        app_state.otp.clone(),
        Duration::from_secs(config.otp.purge_interval_secs),
    );

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Actual address matters when port is 0
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = sweeper {
        handle.abort();
    }
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
