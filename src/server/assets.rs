use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;

use crate::server::error::ApiError;
use crate::server::ServerState;

/// `GET /` serves the frontend entry point.
pub(crate) async fn serve_index(
    State(state): State<Arc<ServerState>>,
) -> Result<Response<Body>, ApiError> {
    serve_file(&state.static_dir, "index.html").await
}

/// `GET /<path>` serves any other asset from the static directory.
pub(crate) async fn serve_asset(
    State(state): State<Arc<ServerState>>,
    Path(asset_path): Path<String>,
) -> Result<Response<Body>, ApiError> {
    serve_file(&state.static_dir, &asset_path).await
}

async fn serve_file(
    base_dir: &std::path::Path,
    asset_path: &str,
) -> Result<Response<Body>, ApiError> {
    let base_dir = base_dir
        .canonicalize()
        .map_err(|error| ApiError::internal(format!("failed to resolve static dir: {error}")))?;

    let resolved = base_dir
        .join(asset_path)
        .canonicalize()
        .map_err(|_| ApiError::not_found("asset not found"))?;

    // Path traversal guard
    if !resolved.starts_with(&base_dir) {
        return Err(ApiError::forbidden("path traversal denied"));
    }

    let bytes = tokio::fs::read(&resolved)
        .await
        .map_err(|_| ApiError::not_found("asset not found"))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&resolved))
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(bytes))
        .map_err(|error| ApiError::internal(error.to_string()))
}

fn content_type_for(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "js" | "mjs" => "application/javascript",
        "css" => "text/css",
        "html" => "text/html",
        "json" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        "woff" => "font/woff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn serves_an_existing_file() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("app.css"), "body {}").expect("write");

        let response = serve_file(dir.path(), "app.css").await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().expect("tempdir");
        assert!(serve_file(dir.path(), "nope.html").await.is_err());
    }

    #[tokio::test]
    async fn traversal_outside_the_base_dir_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let base = dir.path().join("static");
        std::fs::create_dir(&base).expect("mkdir");
        std::fs::write(dir.path().join("secret.txt"), "secret").expect("write");

        assert!(serve_file(&base, "../secret.txt").await.is_err());
    }

    #[test]
    fn content_types_cover_the_frontend_assets() {
        let path = |name: &str| std::path::PathBuf::from(name);
        assert_eq!(content_type_for(&path("index.html")), "text/html");
        assert_eq!(content_type_for(&path("script.js")), "application/javascript");
        assert_eq!(content_type_for(&path("data.bin")), "application/octet-stream");
    }
}
