//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and a create DTO for inserts. Volumes and release entries are never
//! updated in place, so there are no update DTOs.

pub mod release;
pub mod series;
pub mod session;
pub mod user;
pub mod volume;
