use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::country::{CountryRepository, CountryService};

use crate::countries;
use crate::openapi::ApiDoc;

/// Shared handler state. The store behind the service is chosen at startup.
#[derive(Clone)]
pub struct AppState {
    pub countries: Arc<CountryService<dyn CountryRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CountryRepository>) -> Self {
        Self { countries: Arc::new(CountryService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/countries", get(countries::list_countries).post(countries::create_country))
        .route("/countries/id/:id", get(countries::get_country_by_id))
        .route(
            "/countries/:country_code",
            get(countries::get_country)
                .patch(countries::update_country)
                .delete(countries::delete_country),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
