//! Request-intercepting guards.

pub mod auth;
