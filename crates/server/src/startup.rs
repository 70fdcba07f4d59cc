use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StoreKind};
use migration::MigratorTrait;
use service::country::repo::{InMemoryCountryRepository, SeaOrmCountryRepository};
use service::country::CountryRepository;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Open the record store selected by `catalog.store`.
pub async fn build_repository(cfg: &AppConfig) -> Result<Arc<dyn CountryRepository>, StartupError> {
    let prefix_match = cfg.catalog.prefix_match;
    match cfg.catalog.store {
        StoreKind::Memory => {
            info!(?prefix_match, "using in-memory country store");
            Ok(Arc::new(InMemoryCountryRepository::new(prefix_match)))
        }
        StoreKind::Postgres => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            if cfg.catalog.run_migrations {
                migration::Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Database(format!("migrate up: {e}")))?;
                info!("migrations applied");
            }
            info!(?prefix_match, "using postgres country store");
            Ok(Arc::new(SeaOrmCountryRepository::new(db, prefix_match)))
        }
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let repo = build_repository(&cfg).await?;
    let app: Router = routes::build_router(AppState::new(repo), build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting country catalog server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
