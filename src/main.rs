//! Study Timer - a study-session stopwatch
//!
//! Runs the timer screen in a headless host and serves its controls locally.

use tokio::net::TcpListener;
use tracing::info;

use study_timer::{
    api::create_router,
    config::Config,
    host::{ActivityHost, HostCommand},
    persistence::JsonFileStore,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("study_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting study-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, prefs={}, tick={}ms",
        config.host,
        config.port,
        config.prefs_file.display(),
        config.tick_ms
    );

    let store = JsonFileStore::new(&config.prefs_file);
    let (host, handle) = ActivityHost::new(store, config.tick_period());
    let host_task = tokio::spawn(host.run());

    handle.send(HostCommand::Launch).await?;

    let app = create_router(handle.clone());

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start-pause         - Start or pause the timer");
    info!("  POST /stop                - End the session and save it");
    info!("  POST /lifecycle/:event    - launch|cover|uncover|background|foreground|rotate|finish");
    info!("  GET  /status              - Current screen and timer");
    info!("  GET  /health              - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Signal handler failed: {}", e),
            }
        }
    }

    // Close the screen so the session is written out
    let status = handle.shutdown().await?;
    if let Some(action) = status.last_action {
        info!("Last action before exit: {}", action);
    }
    host_task.await?;

    info!("Shutdown complete");
    Ok(())
}
