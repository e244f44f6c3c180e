use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ValidatedQuery,
    errors::responses::{BadGatewayResponse, BadRequestResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::RecommendationResult;
use crate::listings::ListingSource;
use crate::market::MarketDataProvider;
use crate::models::{Listing, MarketStats, RecommendationQuery, RecommendationsResponse};
use crate::service::RecommendationService;

pub const TAG: &str = "recommendations";

/// OpenAPI documentation for the Recommendations API
#[derive(OpenApi)]
#[openapi(
    paths(get_recommendations),
    components(
        schemas(RecommendationsResponse, MarketStats, Listing, RecommendationQuery),
        responses(BadRequestResponse, BadGatewayResponse)
    ),
    tags(
        (name = TAG, description = "Best-deal property recommendations")
    )
)]
pub struct ApiDoc;

/// Create the recommendations router
pub fn router<M, L>(service: RecommendationService<M, L>) -> Router
where
    M: MarketDataProvider + 'static,
    L: ListingSource + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/recommendations", get(get_recommendations::<M, L>))
        .with_state(shared_service)
}

/// Top four listings priced furthest below the location's market average
#[utoipa::path(
    get,
    path = "/recommendations",
    tag = TAG,
    params(RecommendationQuery),
    responses(
        (status = 200, description = "Market stats and best deals", body = RecommendationsResponse),
        (status = 400, response = BadRequestResponse),
        (status = 502, response = BadGatewayResponse)
    )
)]
async fn get_recommendations<M: MarketDataProvider, L: ListingSource>(
    State(service): State<Arc<RecommendationService<M, L>>>,
    ValidatedQuery(query): ValidatedQuery<RecommendationQuery>,
) -> RecommendationResult<Json<RecommendationsResponse>> {
    let response = service.compute_recommendations(&query.location).await?;
    Ok(Json(response))
}
