//! Route definitions for the `/receipts` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::receipts;
use crate::state::AppState;

/// Routes mounted at `/receipts`.
///
/// ```text
/// POST /extract-isbns  -> extract_isbns (multipart image upload)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/extract-isbns", post(receipts::extract_isbns))
}
