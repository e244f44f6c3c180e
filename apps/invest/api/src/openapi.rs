//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dubai Invest - Recommendations",
        version = "0.1.0",
        description = "Best-deal property recommendations for Dubai locations"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation for all APIs
///
/// Domain routes are served at the root, so domain docs are merged rather
/// than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ApiInfo::openapi();
        doc.merge(domain_recommendations::handlers::ApiDoc::openapi());
        doc
    }
}
