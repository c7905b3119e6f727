//! # Garden API
//!
//! JSON endpoints the front end reads seeds and ecosystem pages from.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use garden_core::ecosystem::{
    build_ecosystem_url, ecosystem_url_for, to_ecosystem_project, EcosystemUrlParams,
};
use garden_core::{BeneficiaryMatch, EcosystemProject, Garden, Seed};
use serde::Serialize;
use utoipa::ToSchema;

use super::SharedState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub seeds: Vec<Seed>,
    pub timestamp: String,
    /// Where the catalog came from (live endpoint or fallback snapshot)
    pub source: String,
}

/// A seed exactly as the catalog carries it
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct SeedResponse(pub Seed);

#[derive(Debug, Serialize, ToSchema)]
pub struct EcosystemResponse {
    #[schema(value_type = Object)]
    pub project: EcosystemProject,
    pub url: String,
    /// Seed that owns the beneficiary
    #[schema(value_type = Object)]
    pub seed: Seed,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UrlResponse {
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Not-found as a 404 with a JSON body
#[derive(Debug)]
pub struct NotFound(pub String);

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse { error: self.0 }),
        )
            .into_response()
    }
}

pub fn garden_routes() -> Router<SharedState> {
    Router::new()
        .route("/garden", get(get_garden))
        .route("/seeds/:id", get(get_seed))
        .route("/seeds/:id/:seed_slug/ecosystem/:slug", get(get_seed_ecosystem))
        .route("/ecosystem/:slug", get(get_ecosystem))
        .route("/urls/ecosystem", get(get_ecosystem_url))
}

/// Build the ecosystem view for a match. `seed_slug` selects the URL shape.
pub fn ecosystem_response(found: &BeneficiaryMatch, seed_slug: Option<&str>) -> EcosystemResponse {
    EcosystemResponse {
        project: to_ecosystem_project(&found.beneficiary, &found.seed),
        url: ecosystem_url_for(&found.seed, &found.beneficiary, seed_slug),
        seed: found.seed.clone(),
    }
}

/// Resolve an ecosystem page, scoped to one seed when a seed id is given
pub async fn resolve_ecosystem(
    garden: &Garden,
    seed: Option<(&str, &str)>,
    slug: &str,
) -> Option<EcosystemResponse> {
    match seed {
        Some((seed_id, seed_slug)) => garden
            .find_beneficiary_in_seed(seed_id, slug)
            .await
            .map(|found| ecosystem_response(&found, Some(seed_slug))),
        None => garden
            .find_beneficiary_by_slug(slug)
            .await
            .map(|found| ecosystem_response(&found, None)),
    }
}

/// Full seed catalog (fallback snapshot when the endpoint is down)
#[utoipa::path(
    get,
    path = "/api/v1/garden",
    tag = "garden",
    responses(
        (status = 200, description = "Seed catalog", body = CatalogResponse)
    )
)]
pub async fn get_garden(State(state): State<SharedState>) -> Json<CatalogResponse> {
    let data = state.garden.fetch_garden_data().await;
    let source = if data.success {
        state.garden.describe_source()
    } else {
        "fallback snapshot".to_string()
    };

    Json(CatalogResponse {
        success: data.success,
        timestamp: data.timestamp.to_rfc3339(),
        seeds: data.seeds,
        source,
    })
}

/// Single seed by id
#[utoipa::path(
    get,
    path = "/api/v1/seeds/{id}",
    tag = "garden",
    params(("id" = String, Path, description = "Seed id")),
    responses(
        (status = 200, description = "Seed", body = SeedResponse),
        (status = 404, description = "No seed with that id", body = ErrorResponse)
    )
)]
pub async fn get_seed(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<SeedResponse>, NotFound> {
    match state.garden.fetch_seed_by_id(&id).await {
        Some(seed) => Ok(Json(SeedResponse(seed))),
        None => Err(NotFound(format!("Seed '{}' not found", id))),
    }
}

/// Ecosystem page reached directly, searching every candidate seed
#[utoipa::path(
    get,
    path = "/api/v1/ecosystem/{slug}",
    tag = "ecosystem",
    params(("slug" = String, Path, description = "Beneficiary slug")),
    responses(
        (status = 200, description = "Ecosystem project", body = EcosystemResponse),
        (status = 404, description = "No beneficiary with that slug", body = ErrorResponse)
    )
)]
pub async fn get_ecosystem(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<EcosystemResponse>, NotFound> {
    resolve_ecosystem(&state.garden, None, &slug)
        .await
        .map(Json)
        .ok_or_else(|| NotFound(format!("Beneficiary '{}' not found", slug)))
}

/// Ecosystem page reached while browsing a seed
#[utoipa::path(
    get,
    path = "/api/v1/seeds/{id}/{seed_slug}/ecosystem/{slug}",
    tag = "ecosystem",
    params(
        ("id" = String, Path, description = "Seed id"),
        ("seed_slug" = String, Path, description = "Seed slug"),
        ("slug" = String, Path, description = "Beneficiary slug")
    ),
    responses(
        (status = 200, description = "Ecosystem project", body = EcosystemResponse),
        (status = 404, description = "Seed or beneficiary not found", body = ErrorResponse)
    )
)]
pub async fn get_seed_ecosystem(
    State(state): State<SharedState>,
    Path((id, seed_slug, slug)): Path<(String, String, String)>,
) -> Result<Json<EcosystemResponse>, NotFound> {
    resolve_ecosystem(&state.garden, Some((id.as_str(), seed_slug.as_str())), &slug)
        .await
        .map(Json)
        .ok_or_else(|| NotFound(format!("Beneficiary '{}' not found in seed '{}'", slug, id)))
}

/// Compose a canonical ecosystem path
#[utoipa::path(
    get,
    path = "/api/v1/urls/ecosystem",
    tag = "ecosystem",
    params(
        ("beneficiarySlug" = String, Query, description = "Beneficiary slug"),
        ("seedId" = Option<String>, Query, description = "Seed id"),
        ("seedSlug" = Option<String>, Query, description = "Seed slug")
    ),
    responses(
        (status = 200, description = "Path for the ecosystem page", body = UrlResponse)
    )
)]
pub async fn get_ecosystem_url(Query(params): Query<EcosystemUrlParams>) -> Json<UrlResponse> {
    Json(UrlResponse {
        url: build_ecosystem_url(&params),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AppState;
    use garden_core::catalog::fallback_seeds;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn offline_state() -> SharedState {
        Arc::new(AppState {
            garden: Garden::offline(),
        })
    }

    #[tokio::test]
    async fn test_get_garden_reports_fallback() {
        let Json(body) = get_garden(State(offline_state())).await;
        assert!(!body.success);
        assert_eq!(body.seeds.len(), 2);
        assert_eq!(body.source, "fallback snapshot");
    }

    #[tokio::test]
    async fn test_get_seed_found_and_missing() {
        let Json(body) = get_seed(State(offline_state()), Path("2".to_string()))
            .await
            .unwrap();
        assert_eq!(body.0.id, "2");
        assert_eq!(body.0.name, "Equatorial Roots");

        let missing = get_seed(State(offline_state()), Path("42".to_string())).await;
        assert!(missing.is_err());
        let response = missing.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_global_ecosystem_route() {
        let Json(body) = get_ecosystem(State(offline_state()), Path("grg".to_string()))
            .await
            .unwrap();
        assert_eq!(body.url, "/ecosystem/grg");
        assert_eq!(body.project.seed_id, "2");
        assert_eq!(body.project.seed_emblem_url, "/seeds/01__GRG_big.svg");
    }

    #[tokio::test]
    async fn test_seed_scoped_ecosystem_route() {
        let path = Path((
            "2".to_string(),
            "equatorial-roots".to_string(),
            "elg".to_string(),
        ));
        let Json(body) = get_seed_ecosystem(State(offline_state()), path)
            .await
            .unwrap();
        assert_eq!(body.url, "/seed/2/equatorial-roots/ecosystem/elg");
        assert_eq!(body.seed.name, "Equatorial Roots");
        assert_eq!(body.seed.id, body.project.seed_id);

        let wrong_seed = Path(("1".to_string(), "x".to_string(), "elg".to_string()));
        assert!(get_seed_ecosystem(State(offline_state()), wrong_seed)
            .await
            .is_err());
    }

    fn json_keys(value: &serde_json::Value) -> BTreeSet<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[tokio::test]
    async fn test_seed_body_is_the_bare_seed() {
        let Json(body) = get_seed(State(offline_state()), Path("1".to_string()))
            .await
            .unwrap();
        let value = serde_json::to_value(&body).unwrap();
        let expected = serde_json::to_value(fallback_seeds().remove(0)).unwrap();

        assert_eq!(value, expected);
        assert!(json_keys(&value).contains("seedImageUrl"));
        assert!(!json_keys(&value).contains("seed"));
    }

    #[tokio::test]
    async fn test_ecosystem_body_keys() {
        let Json(body) = get_ecosystem(State(offline_state()), Path("wal".to_string()))
            .await
            .unwrap();
        let value = serde_json::to_value(&body).unwrap();

        let keys: Vec<String> = json_keys(&value).into_iter().collect();
        assert_eq!(keys, vec!["project", "seed", "url"]);
        assert_eq!(value["seed"]["id"], "1");
        assert_eq!(value["project"]["seedId"], "1");
        assert_eq!(value["url"], "/ecosystem/wal");
    }

    #[tokio::test]
    async fn test_url_endpoint() {
        let Json(body) = get_ecosystem_url(Query(EcosystemUrlParams::seed_scoped(
            "1", "seed-one", "grg",
        )))
        .await;
        assert_eq!(body.url, "/seed/1/seed-one/ecosystem/grg");
    }
}
