//! Handlers for volume ownership, nested under series:
//! `/series/{series_id}/volumes[/{volume_number}]`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use komitrack_core::catalog;
use komitrack_core::error::CoreError;
use komitrack_core::types::DbId;
use komitrack_db::models::volume::{CreateVolume, UserVolume};
use komitrack_db::repositories::{SeriesRepo, VolumeRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/series/{series_id}/volumes
///
/// Record that the caller owns a volume of the series. A duplicate
/// (user, series, volume) insert is rejected by the store's unique
/// constraint and surfaces as 409; the store is left unchanged.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(series_id): Path<DbId>,
    Json(input): Json<CreateVolume>,
) -> AppResult<(StatusCode, Json<UserVolume>)> {
    catalog::validate_volume_number(input.volume_number)?;

    // Volumes must reference an existing series.
    SeriesRepo::find_by_id(&state.pool, series_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: series_id,
        }))?;

    let volume = VolumeRepo::create(&state.pool, auth_user.user_id, series_id, &input).await?;
    Ok((StatusCode::CREATED, Json(volume)))
}

/// GET /api/v1/series/{series_id}/volumes
///
/// List the caller's owned volumes for the series, ordered by volume number.
pub async fn list_for_series(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(series_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<UserVolume>>>> {
    let volumes =
        VolumeRepo::list_for_series(&state.pool, auth_user.user_id, series_id).await?;
    Ok(Json(DataResponse { data: volumes }))
}

/// DELETE /api/v1/series/{series_id}/volumes/{volume_number}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((series_id, volume_number)): Path<(DbId, i32)>,
) -> AppResult<StatusCode> {
    let deleted =
        VolumeRepo::delete(&state.pool, auth_user.user_id, series_id, volume_number).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        // The volume is addressed by number within the series scope.
        Err(AppError::Core(CoreError::NotFound {
            entity: "Volume",
            id: DbId::from(volume_number),
        }))
    }
}
