//! Release feed entry model and DTOs.

use chrono::NaiveDate;
use komitrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A release feed row from the `release_entries` table.
///
/// The feed is populated out-of-band; `title` is free text with no foreign
/// key to the series catalog. Matching happens at query time by exact title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReleaseEntry {
    pub id: DbId,
    pub title: String,
    pub volume_number: i32,
    pub release_date: NaiveDate,
    pub source: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a release feed entry (used by seeders and tests; no
/// HTTP surface mutates the feed).
#[derive(Debug)]
pub struct CreateReleaseEntry {
    pub title: String,
    pub volume_number: i32,
    pub release_date: NaiveDate,
    pub source: Option<String>,
}
