//! Handlers for the `/series` resource (shared catalog).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use komitrack_core::catalog;
use komitrack_core::error::CoreError;
use komitrack_core::types::DbId;
use komitrack_db::models::series::{CreateSeries, Series};
use komitrack_db::repositories::SeriesRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/series
///
/// Add a series to the shared catalog. The catalog is not per-user, so any
/// authenticated user may add to it.
pub async fn create(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(input): Json<CreateSeries>,
) -> AppResult<(StatusCode, Json<Series>)> {
    catalog::validate_series_title(&input.title)?;
    catalog::validate_author(input.author.as_deref())?;
    catalog::validate_total_volumes(input.total_volumes)?;

    let series = SeriesRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(series)))
}

/// GET /api/v1/series
pub async fn list(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Series>>>> {
    let series = SeriesRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: series }))
}

/// GET /api/v1/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Series>> {
    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id,
        }))?;
    Ok(Json(series))
}
