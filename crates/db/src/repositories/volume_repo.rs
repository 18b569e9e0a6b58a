//! Repository for the `user_volumes` table.

use komitrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::volume::{CreateVolume, UserVolume};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, series_id, volume_number, purchase_date, created_at";

/// Provides operations for per-user volume ownership.
///
/// Ownership rows are inserted and deleted, never updated. Duplicate
/// `(user, series, volume_number)` inserts are rejected by the
/// `uq_user_volumes_user_series_volume` constraint -- a single-row insert, so
/// a rejected attempt leaves the store unchanged without application-level
/// locking.
pub struct VolumeRepo;

impl VolumeRepo {
    /// Record ownership of a volume, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        series_id: DbId,
        input: &CreateVolume,
    ) -> Result<UserVolume, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_volumes (user_id, series_id, volume_number, purchase_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserVolume>(&query)
            .bind(user_id)
            .bind(series_id)
            .bind(input.volume_number)
            .bind(input.purchase_date)
            .fetch_one(pool)
            .await
    }

    /// Check whether the user owns a specific volume of a series.
    pub async fn exists(
        pool: &PgPool,
        user_id: DbId,
        series_id: DbId,
        volume_number: i32,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM user_volumes
                WHERE user_id = $1 AND series_id = $2 AND volume_number = $3
             )",
        )
        .bind(user_id)
        .bind(series_id)
        .bind(volume_number)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List the user's owned volumes for one series, ordered by volume number.
    pub async fn list_for_series(
        pool: &PgPool,
        user_id: DbId,
        series_id: DbId,
    ) -> Result<Vec<UserVolume>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_volumes
             WHERE user_id = $1 AND series_id = $2
             ORDER BY volume_number ASC"
        );
        sqlx::query_as::<_, UserVolume>(&query)
            .bind(user_id)
            .bind(series_id)
            .fetch_all(pool)
            .await
    }

    /// List the user's owned volume numbers for one series, sorted ascending.
    pub async fn list_volume_numbers(
        pool: &PgPool,
        user_id: DbId,
        series_id: DbId,
    ) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT volume_number FROM user_volumes
             WHERE user_id = $1 AND series_id = $2
             ORDER BY volume_number ASC",
        )
        .bind(user_id)
        .bind(series_id)
        .fetch_all(pool)
        .await
    }

    /// List the distinct series ids the user owns at least one volume of.
    pub async fn list_owned_series_ids(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT series_id FROM user_volumes
             WHERE user_id = $1
             ORDER BY series_id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Remove an ownership record. Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        user_id: DbId,
        series_id: DbId,
        volume_number: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM user_volumes
             WHERE user_id = $1 AND series_id = $2 AND volume_number = $3",
        )
        .bind(user_id)
        .bind(series_id)
        .bind(volume_number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
