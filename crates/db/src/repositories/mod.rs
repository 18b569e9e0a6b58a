//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod release_repo;
pub mod series_repo;
pub mod session_repo;
pub mod user_repo;
pub mod volume_repo;

pub use release_repo::ReleaseRepo;
pub use series_repo::SeriesRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use volume_repo::VolumeRepo;
