//! Per-user volume ownership model and DTOs.

use chrono::NaiveDate;
use komitrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An owned volume row from the `user_volumes` table.
///
/// Rows are inserted and deleted, never updated. The
/// `(user_id, series_id, volume_number)` triple is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserVolume {
    pub id: DbId,
    pub user_id: DbId,
    pub series_id: DbId,
    pub volume_number: i32,
    pub purchase_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for recording ownership of a volume.
#[derive(Debug, Deserialize)]
pub struct CreateVolume {
    pub volume_number: i32,
    pub purchase_date: Option<NaiveDate>,
}
