use shopbridge::application::handlers::AppState;
use shopbridge::application::router::{build_router, RECENT_ORDERS_PATH, WEBHOOK_PATH};
use shopbridge::application::services::relay_service::RelayService;
use shopbridge::config::RelayConfig;
use shopbridge::persistence::init_database;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env file: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopbridge=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("ShopBridge webhook relay starting...");

    let config = RelayConfig::from_env();
    let pool = init_database(&config.database_url, config.database_max_connections).await?;

    let relay = RelayService::from_config(&config, pool.clone());
    let app = build_router(AppState::new(relay, pool.clone()), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Listening on {}", config.bind_address);
    info!("Webhook: POST {}  Recent orders: GET {}", WEBHOOK_PATH, RECENT_ORDERS_PATH);

    let shutdown_signal = async {
        let ctrl_c = async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C signal"),
                Err(e) => error!("Failed to install Ctrl+C handler: {}", e),
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                    info!("Received SIGTERM signal");
                }
                Err(e) => error!("Failed to install SIGTERM handler: {}", e),
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutting down gracefully...");
    pool.close().await;
    info!("Shutdown complete");

    Ok(())
}
