use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{
    create_cors_layer, create_permissive_cors_layer, parse_allowed_origins, security_headers,
};
use axum::{Router, middleware};
use core_config::{Environment, env_required};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tokio::sync::watch;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Binds the configured address and serves `router` until SIGINT/SIGTERM.
///
/// After the signal, in-flight requests get `shutdown_timeout` to finish
/// before the server is dropped.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails while running.
pub async fn create_app(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let (signalled_tx, mut signalled_rx) = watch::channel(false);
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signalled_tx.send(true);
        })
        .into_future();

    let drain_deadline = async move {
        if signalled_rx.wait_for(|signalled| *signalled).await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server => {
            result.inspect_err(|e| {
                tracing::error!("Server encountered an error: {:?}", e);
            })?;
        }
        _ = drain_deadline => {
            warn!(
                "In-flight requests exceeded shutdown timeout of {:?}, forcing shutdown",
                shutdown_timeout
            );
        }
    }

    Ok(())
}

/// Wraps the API routes with documentation and cross-cutting middleware.
///
/// Adds:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar) and
///   `/api-docs/openapi.json`
/// - The API routes, mounted at the root
/// - Request tracing, security headers, CORS, response compression
/// - JSON 404 fallback
///
/// Health endpoints are merged separately by the app with `health_router()`.
///
/// # CORS
///
/// `CORS_ALLOWED_ORIGIN` holds comma-separated allowed origins
/// (e.g. `http://localhost:5173,https://invest.example.com`). It is required in
/// production; in development an unset value falls back to a permissive layer.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` is invalid, empty, or missing in
/// production.
pub fn create_router<T>(apis: Router, environment: &Environment) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_from_env(environment)?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

fn cors_from_env(environment: &Environment) -> io::Result<CorsLayer> {
    match env_required("CORS_ALLOWED_ORIGIN") {
        Ok(raw) => {
            let origins = parse_allowed_origins(&raw)?;
            info!("CORS configured with allowed origins: {}", raw);
            Ok(create_cors_layer(origins))
        }
        Err(_) if environment.is_production() => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required in production. Example: CORS_ALLOWED_ORIGIN=https://invest.example.com",
        )),
        Err(_) => {
            warn!("CORS_ALLOWED_ORIGIN not set, using permissive CORS for development");
            Ok(create_permissive_cors_layer())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn routes() -> Router {
        Router::new().route("/ping", get(|| async { "pong" }))
    }

    #[test]
    fn test_create_router_requires_cors_in_production() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let result = create_router::<TestDoc>(routes(), &Environment::Production);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_create_router_rejects_empty_origin_list() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" "), || {
            let result = create_router::<TestDoc>(routes(), &Environment::Development);
            assert!(result.is_err());
        });
    }

    #[tokio::test]
    async fn test_routes_are_mounted_at_root_with_json_fallback() {
        let router = temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<TestDoc>(routes(), &Environment::Development).unwrap()
        });

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );

        let response = router
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
