//! Row models and DTOs, one module per table.

pub mod notebook;
pub mod project;
pub mod time_entry;
