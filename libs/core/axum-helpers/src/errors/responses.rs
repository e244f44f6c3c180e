//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Query validation failed or a domain rule was violated",
    content_type = "application/json",
    examples(
        ("Validation" = (
            summary = "Query parameter failed validation",
            value = json!({
                "detail": [{
                    "loc": ["query", "location"],
                    "msg": "String should have at least 2 characters",
                    "type": "length"
                }]
            })
        )),
        ("InvalidConfiguration" = (
            summary = "Market average is not positive",
            value = json!({
                "detail": "Market average price must be greater than zero."
            })
        ))
    )
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Gateway - Upstream provider failed",
    content_type = "application/json",
    example = json!({
        "detail": "Listing source error: connection refused"
    })
)]
pub struct BadGatewayResponse(pub ErrorResponse);
