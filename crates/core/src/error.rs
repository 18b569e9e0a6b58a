//! Domain error type shared across the workspace.

use crate::types::DbId;

/// Domain-level errors produced by core logic and surfaced by the API layer.
///
/// The `api` crate maps each variant to an HTTP status in its `AppError`
/// implementation; core code never deals with status codes directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity type name, e.g. `"Series"`.
        entity: &'static str,
        id: DbId,
    },

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. a duplicate row).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
