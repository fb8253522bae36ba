//! Request handlers, one module per resource.

pub mod notebooks;
pub mod projects;
pub mod time_entries;
