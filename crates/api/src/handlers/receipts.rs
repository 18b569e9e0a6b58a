//! Handler for receipt photo uploads: relay the image to the recognition
//! backend and normalize whatever comes back into a clean ISBN list.

use axum::extract::{Multipart, State};
use axum::Json;
use komitrack_core::isbn;
use komitrack_ocr::Recognition;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `POST /receipts/extract-isbns`.
#[derive(Debug, Serialize)]
pub struct ExtractIsbnsResponse {
    /// Sorted, deduplicated ISBN candidates. Empty when the receipt contains
    /// none (that is a success, not an error).
    pub isbns: Vec<String>,
}

/// POST /api/v1/receipts/extract-isbns
///
/// Accepts a multipart form with a single `file` part holding a receipt
/// photo. The image is buffered in memory and forwarded to the recognition
/// backend; nothing is written to disk. Non-image uploads are rejected with
/// 400 before any backend call.
pub async fn extract_isbns(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<ExtractIsbnsResponse>> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .unwrap_or("receipt")
            .to_string();
        let content_type = field
            .content_type()
            .ok_or_else(|| AppError::BadRequest("File must have a content type".into()))?
            .to_string();

        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(format!(
                "File must be an image, got '{content_type}'"
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        upload = Some((filename, content_type, data.to_vec()));
        break;
    }

    let (filename, content_type, data) =
        upload.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;

    tracing::debug!(
        filename = %filename,
        size = data.len(),
        "Relaying receipt image to recognition backend"
    );

    let recognition = state.ocr.recognize(&filename, &content_type, data).await?;

    let isbns = match recognition {
        // Backend already extracted codes; we still dedupe and sort.
        Recognition::Codes(codes) => {
            let set: BTreeSet<String> = codes.into_iter().collect();
            set.into_iter().collect()
        }
        Recognition::Text(text) => {
            if isbn::is_no_result_sentinel(&text) {
                Vec::new()
            } else {
                isbn::extract_isbns(&text)
            }
        }
    };

    tracing::info!(count = isbns.len(), "Extracted ISBNs from receipt");
    Ok(Json(ExtractIsbnsResponse { isbns }))
}
