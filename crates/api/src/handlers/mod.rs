//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input via `komitrack_core`, delegate persistence to the
//! repositories in `komitrack_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod receipts;
pub mod reports;
pub mod series;
pub mod volume;
