//! Series catalog entity model and DTOs.

use komitrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comic series row from the `series` table.
///
/// The catalog is shared across all users; ownership lives in
/// [`crate::models::volume::UserVolume`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Series {
    pub id: DbId,
    pub title: String,
    pub author: Option<String>,
    /// Known number of published volumes, when the series is bounded.
    pub total_volumes: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for adding a series to the catalog.
#[derive(Debug, Deserialize)]
pub struct CreateSeries {
    pub title: String,
    pub author: Option<String>,
    pub total_volumes: Option<i32>,
}
