//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`. All require authentication.
///
/// ```text
/// GET /new-releases     -> new_releases (?month=&year=)
/// GET /missing-volumes  -> missing_volumes
/// GET /summary          -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-releases", get(reports::new_releases))
        .route("/missing-volumes", get(reports::missing_volumes))
        .route("/summary", get(reports::summary))
}
