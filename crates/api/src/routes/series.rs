//! Route definitions for the `/series` resource and nested volume ownership.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{series, volume};
use crate::state::AppState;

/// Routes mounted at `/series`.
///
/// ```text
/// GET    /                                     -> list
/// POST   /                                     -> create
/// GET    /{id}                                 -> get_by_id
/// GET    /{series_id}/volumes                  -> list owned volumes
/// POST   /{series_id}/volumes                  -> record ownership
/// DELETE /{series_id}/volumes/{volume_number}  -> remove ownership
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(series::list).post(series::create))
        .route("/{id}", get(series::get_by_id))
        .route(
            "/{series_id}/volumes",
            post(volume::create).get(volume::list_for_series),
        )
        .route(
            "/{series_id}/volumes/{volume_number}",
            delete(volume::delete),
        )
}
