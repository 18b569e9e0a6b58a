//! Repository for the `release_entries` table.
//!
//! The release feed is read-only to the HTTP surface; `create` exists for
//! the out-of-band seeder and for tests.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::release::{CreateReleaseEntry, ReleaseEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, volume_number, release_date, source, created_at";

/// Provides read access to the externally sourced release feed.
pub struct ReleaseRepo;

impl ReleaseRepo {
    /// Insert a feed entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReleaseEntry,
    ) -> Result<ReleaseEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO release_entries (title, volume_number, release_date, source)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReleaseEntry>(&query)
            .bind(&input.title)
            .bind(input.volume_number)
            .bind(input.release_date)
            .bind(&input.source)
            .fetch_one(pool)
            .await
    }

    /// List feed entries whose release date falls in `[start, end)`.
    ///
    /// The half-open bound means `end` itself is excluded; callers pass the
    /// first day of the following month.
    pub async fn list_in_window(
        pool: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ReleaseEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM release_entries
             WHERE release_date >= $1 AND release_date < $2
             ORDER BY release_date ASC, id ASC"
        );
        sqlx::query_as::<_, ReleaseEntry>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}
