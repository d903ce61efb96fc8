//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod session_repo;
pub mod site_config_repo;
pub mod user_repo;
pub mod workshop_repo;

pub use session_repo::SessionRepo;
pub use site_config_repo::SiteConfigRepo;
pub use user_repo::UserRepo;
pub use workshop_repo::WorkshopRepo;
