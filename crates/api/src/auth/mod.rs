//! Token handling for the authorization gate.

pub mod jwt;
