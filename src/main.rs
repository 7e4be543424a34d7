use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use greenhouse_console::api::ApiClient;
use greenhouse_console::common::AppState;
use greenhouse_console::config::Config;
use greenhouse_console::error::ConsoleError;
use greenhouse_console::routes;

#[tokio::main]
async fn main() -> Result<(), ConsoleError> {
    // Load configuration before logging so the deployment picks the format
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,greenhouse_console=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.deployment.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting greenhouse-console...");
    tracing::info!(
        deployment = ?config.deployment,
        host = %config.console_host,
        port = config.console_port,
        api_url = %config.api_url,
        api_timeout_ms = config.api_timeout_ms,
        "Configuration loaded"
    );

    // Create greenhouse API client
    let api_client = ApiClient::new(&config)?;
    tracing::info!(base_url = %api_client.base_url(), "Greenhouse API client initialized");

    // Create application state
    let addr = config.bind_address();
    let state = AppState::new(config, api_client);

    // Build router
    let app = routes::build_router(state);

    // Start server with graceful shutdown
    tracing::info!(address = %addr, "Starting server");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
