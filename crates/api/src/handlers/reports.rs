//! Handlers for the read-only reports: new releases, missing volumes, and
//! the collection summary.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate, Utc};
use komitrack_core::types::DbId;
use komitrack_core::{gaps, releases};
use komitrack_db::repositories::{ReleaseRepo, SeriesRepo, VolumeRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the new-releases report. Both default to the current
/// UTC month.
#[derive(Debug, Deserialize)]
pub struct ReleaseReportParams {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// One release the user does not own yet.
#[derive(Debug, Serialize)]
pub struct NewRelease {
    pub series_id: DbId,
    pub title: String,
    pub volume_number: i32,
    /// ISO date string (`YYYY-MM-DD`).
    pub release_date: NaiveDate,
    pub source: Option<String>,
}

/// One owned series with detected missing volumes.
#[derive(Debug, Serialize)]
pub struct MissingVolumesEntry {
    pub series_id: DbId,
    pub title: String,
    pub author: Option<String>,
    /// e.g. `"Owned 5 volumes (Min: 1, Max: 7)"`.
    pub owned_summary: String,
    /// e.g. `"Gaps in owned range: Vol. 3; Missing later volumes: Vol. 8-10"`.
    pub missing_info: String,
}

/// Counts for the collection dashboard.
#[derive(Debug, Serialize)]
pub struct CollectionSummary {
    /// Releases this month the user does not own.
    pub new_releases_count: usize,
    /// Owned series with detected missing volumes.
    pub missing_volumes_count: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/reports/new-releases
///
/// Release feed entries in the given (default: current) calendar month whose
/// title exactly matches a cataloged series and whose volume the caller does
/// not own. Entries for unknown titles are silently excluded: a release
/// cannot be "new" for a series the tracker does not know about.
pub async fn new_releases(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<ReleaseReportParams>,
) -> AppResult<Json<DataResponse<Vec<NewRelease>>>> {
    let entries = unowned_releases_for_month(&state, auth_user.user_id, &params).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/reports/missing-volumes
///
/// For every series the caller owns at least one volume of, report internal
/// gaps and known-but-unowned later volumes. Series with no findings are
/// omitted entirely.
pub async fn missing_volumes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<MissingVolumesEntry>>>> {
    let entries = missing_volumes_for_user(&state, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/reports/summary
///
/// Counts of this month's unowned releases and of owned series with missing
/// volumes, for the collection dashboard.
pub async fn summary(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<CollectionSummary>> {
    let params = ReleaseReportParams {
        month: None,
        year: None,
    };
    let new_releases = unowned_releases_for_month(&state, auth_user.user_id, &params).await?;
    let missing = missing_volumes_for_user(&state, auth_user.user_id).await?;

    Ok(Json(CollectionSummary {
        new_releases_count: new_releases.len(),
        missing_volumes_count: missing.len(),
    }))
}

// ---------------------------------------------------------------------------
// Report computation
// ---------------------------------------------------------------------------

/// Compute the new-releases report for one user and month.
async fn unowned_releases_for_month(
    state: &AppState,
    user_id: DbId,
    params: &ReleaseReportParams,
) -> AppResult<Vec<NewRelease>> {
    let today = Utc::now().date_naive();
    let month = params.month.unwrap_or_else(|| today.month());
    let year = params.year.unwrap_or_else(|| today.year());

    let (start, end) = releases::month_window(year, month)?;
    let feed = ReleaseRepo::list_in_window(&state.pool, start, end).await?;

    let mut results = Vec::new();
    for entry in feed {
        // Exact-title lookup; unknown titles are excluded by design. Ties on
        // duplicate titles resolve to the lowest series id.
        let Some(series) = SeriesRepo::find_by_title(&state.pool, &entry.title).await? else {
            continue;
        };

        let owned =
            VolumeRepo::exists(&state.pool, user_id, series.id, entry.volume_number).await?;
        if owned {
            continue;
        }

        results.push(NewRelease {
            series_id: series.id,
            title: entry.title,
            volume_number: entry.volume_number,
            release_date: entry.release_date,
            source: entry.source,
        });
    }

    Ok(results)
}

/// Compute the missing-volumes report for one user.
async fn missing_volumes_for_user(
    state: &AppState,
    user_id: DbId,
) -> AppResult<Vec<MissingVolumesEntry>> {
    let series_ids = VolumeRepo::list_owned_series_ids(&state.pool, user_id).await?;

    let mut results = Vec::new();
    for series_id in series_ids {
        let Some(series) = SeriesRepo::find_by_id(&state.pool, series_id).await? else {
            // Ownership rows cascade-delete with their series; a miss here
            // means the series vanished mid-report. Skip it.
            continue;
        };

        let owned = VolumeRepo::list_volume_numbers(&state.pool, user_id, series_id).await?;
        let Some(report) = gaps::missing_volumes(&owned, series.total_volumes) else {
            continue;
        };

        results.push(MissingVolumesEntry {
            series_id: series.id,
            title: series.title,
            author: series.author,
            owned_summary: report.owned_summary(),
            missing_info: report.missing_info(),
        });
    }

    Ok(results)
}
