//! Fallback for unknown API paths.

use axum::{extract::OriginalUri, http::StatusCode, Json};

use crate::errors::ApiResponse;

/// Any unmatched `/api/*` path — JSON 404 in the response envelope.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        ApiResponse::error("NOT_FOUND", &format!("No API route for {}", uri.path())),
    )
}
