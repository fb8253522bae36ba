//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod notebook_repo;
pub mod project_repo;
pub mod time_entry_repo;

pub use notebook_repo::NotebookRepo;
pub use project_repo::ProjectRepo;
pub use time_entry_repo::TimeEntryRepo;
