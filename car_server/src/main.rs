//! Car Service — car records enriched with client data.
//!
//! Stores cars in PostgreSQL (or in memory when no database is configured)
//! and resolves each car's owning client from the client service at
//! response time.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use car_service::config::CarServiceConfig;
use car_service::migrations;
use car_service::repositories::{postgres, CarRepository, InMemoryCarRepository, PgCarRepository};
use car_service::routes::{self, AppState};
use car_service::services::car_service::CarService;
use car_service::services::client_api::HttpClientApi;

#[derive(Parser)]
#[command(name = "car-service", about = "Car records service")]
struct Cli {
    /// Server port
    #[arg(short, long, env = "CAR_PORT", default_value = "8082")]
    port: u16,

    /// PostgreSQL connection URL; cars are kept in memory when absent
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .init();
    }

    let cli = Cli::parse();
    let config = CarServiceConfig::from_env();

    tracing::info!("Starting Car Service...");

    let repo: Arc<dyn CarRepository> = match cli.database_url {
        Some(db_url) => {
            let pool = postgres::build_pool(&db_url, config.db_max_connections)?;
            {
                let mut conn = pool
                    .get()
                    .await
                    .map_err(|e| anyhow::anyhow!("diesel pool: {e}"))?;
                tracing::info!("Running database migrations...");
                migrations::run_migration(&mut *conn).await?;
                tracing::info!("Database migrations completed.");
            }
            Arc::new(PgCarRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set -- cars are stored in memory only");
            Arc::new(InMemoryCarRepository::new())
        }
    };

    let clients = HttpClientApi::new(
        config.client_service_url.clone(),
        config.client_lookup_timeout(),
    )?;
    tracing::info!(url = %config.client_service_url, "Client service configured");

    let state = AppState {
        cars: Arc::new(CarService::new(repo, Arc::new(clients))),
    };

    let app = routes::car_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.request_timeout())),
    );

    // Initialize metrics
    car_service::metrics::init_metrics(config.metrics_port);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!("Car Service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
