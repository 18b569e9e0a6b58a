pub mod auth;
pub mod health;
pub mod receipts;
pub mod reports;
pub mod series;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                              register (public)
/// /auth/login                                 login (public)
/// /auth/refresh                               refresh (public)
/// /auth/logout                                logout (requires auth)
/// /auth/change-password                       change password (requires auth)
///
/// /series                                     list, create
/// /series/{id}                                get
/// /series/{series_id}/volumes                 list, create ownership
/// /series/{series_id}/volumes/{volume_number} delete ownership
///
/// /reports/new-releases                       unowned releases this month (GET)
/// /reports/missing-volumes                    gap report per owned series (GET)
/// /reports/summary                            dashboard counts (GET)
///
/// /receipts/extract-isbns                     receipt photo upload (POST, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Shared series catalog + per-user volume ownership.
        .nest("/series", series::router())
        // Read-only collection reports.
        .nest("/reports", reports::router())
        // Receipt photo ISBN extraction.
        .nest("/receipts", receipts::router())
}
