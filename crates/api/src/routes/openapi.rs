//! OpenAPI documentation and Swagger UI routes.

use axum::{
    body::Body,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use rust_embed::Embed;

/// Swagger UI shell, served under `/api/docs/`.
#[derive(Embed)]
#[folder = "assets/swagger-ui/"]
struct SwaggerAssets;

const OPENAPI_SPEC: &str = include_str!("../../../../docs/api/openapi.yaml");

const DOCS_PREFIX: &str = "/api/docs/";

/// Redirect `/api/docs` to `/api/docs/`.
pub async fn swagger_ui_redirect() -> Redirect {
    Redirect::permanent(DOCS_PREFIX)
}

/// Asset name for a docs URL path; the bare prefix is the index page.
fn asset_path(uri_path: &str) -> &str {
    match uri_path.trim_start_matches(DOCS_PREFIX) {
        "" => "index.html",
        path => path,
    }
}

pub async fn swagger_ui(uri: Uri) -> Response {
    let path = asset_path(uri.path());

    let Some(content) = SwaggerAssets::get(path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(content.data.into_owned()))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Serves the embedded OpenAPI document.
pub async fn openapi_spec() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/yaml; charset=utf-8")],
        OPENAPI_SPEC,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_structure() {
        for section in ["openapi:", "info:", "paths:", "components:", "securitySchemes:"] {
            assert!(OPENAPI_SPEC.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_openapi_spec_documents_endpoints() {
        for endpoint in [
            "/api/v1/packages",
            "/api/v1/invoices",
            "/api/v1/invoices/quote",
            "/api/v1/leads/{lead_id}/notes",
            "/api/v1/admin/dashboard",
        ] {
            assert!(OPENAPI_SPEC.contains(endpoint), "missing {endpoint}");
        }
    }

    #[test]
    fn test_swagger_index_is_embedded() {
        assert!(SwaggerAssets::get("index.html").is_some());
    }

    #[test]
    fn test_asset_path() {
        assert_eq!(asset_path("/api/docs/"), "index.html");
        assert_eq!(asset_path("/api/docs/index.html"), "index.html");
        assert_eq!(asset_path("/api/docs/swagger-ui.css"), "swagger-ui.css");
    }

    #[test]
    fn test_mime_types() {
        let html = mime_guess::from_path("index.html").first_or_octet_stream();
        assert_eq!(html.subtype(), "html");
        let unknown = mime_guess::from_path("file.unknownext").first_or_octet_stream();
        assert_eq!(unknown.subtype(), "octet-stream");
    }
}
