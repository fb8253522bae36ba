//! Domain types and validation for the worklog platform.
//!
//! This crate is I/O-free: it defines the shared id/timestamp aliases, the
//! domain error enum, and the explicit validation functions that shape
//! candidate records before the `worklog-db` layer persists them.

pub mod error;
pub mod notebook;
pub mod time_tracking;
pub mod types;
pub mod validation;
