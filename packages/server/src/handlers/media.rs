use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tokio_util::io::ReaderStream;
use tracing::instrument;
use wardrobe_common::storage::BlobPath;

use crate::error::AppError;
use crate::state::AppState;

/// Serve a stored image. Public: the URLs handed out after upload are
/// meant to be embedded directly.
#[instrument(skip(state))]
pub async fn serve_media(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let blob_path = BlobPath::parse(&path)?;
    let reader = state.blob_store.get_stream(&blob_path).await?;
    let body = Body::from_stream(ReaderStream::new(reader));

    let content_type = mime_guess::from_path(blob_path.as_str())
        .first()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, "public, max-age=86400")
        .body(body)
        .map_err(|e| AppError::Internal(format!("Failed to build response: {e}")))
}
