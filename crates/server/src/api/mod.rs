//! # API
//!
//! Router assembly and OpenAPI document for the garden server.

pub mod garden;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use garden_core::Garden;
use std::sync::Arc;
use utoipa::OpenApi;

/// Application state
pub struct AppState {
    pub garden: Garden,
}

pub type SharedState = Arc<AppState>;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden API",
        version = "1.0.0",
        description = "Seed catalog and ecosystem view models for the Garden front end"
    ),
    paths(
        garden::get_garden,
        garden::get_seed,
        garden::get_ecosystem,
        garden::get_seed_ecosystem,
        garden::get_ecosystem_url
    ),
    components(
        schemas(
            garden::CatalogResponse,
            garden::SeedResponse,
            garden::EcosystemResponse,
            garden::UrlResponse,
            garden::ErrorResponse
        )
    ),
    tags(
        (name = "garden", description = "Seed catalog"),
        (name = "ecosystem", description = "Beneficiary pages and links")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> Response {
    match ApiDoc::openapi().to_json() {
        Ok(spec) => Response::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(spec))
            .map(IntoResponse::into_response)
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Full application router
pub fn router(state: SharedState) -> Router {
    Router::new()
        .nest("/api/v1", garden::garden_routes())
        .route("/api/v1/openapi.json", get(serve_openapi))
        .with_state(state)
}
