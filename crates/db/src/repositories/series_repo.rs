//! Repository for the `series` table.

use komitrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::series::{CreateSeries, Series};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, total_volumes, created_at";

/// Provides CRUD operations for the shared series catalog.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert a new series, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSeries) -> Result<Series, sqlx::Error> {
        let query = format!(
            "INSERT INTO series (title, author, total_volumes)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.total_volumes)
            .fetch_one(pool)
            .await
    }

    /// Find a series by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a series by exact title match.
    ///
    /// Titles are not unique; when several rows share a title the one with
    /// the lowest id wins, making the release matcher deterministic.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series WHERE title = $1 ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List all series in the catalog, ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series ORDER BY title ASC, id ASC");
        sqlx::query_as::<_, Series>(&query).fetch_all(pool).await
    }
}
