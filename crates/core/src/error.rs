use crate::types::DbId;

/// Failure modes the request path actually produces.
///
/// Payload validation does not go through this enum; it is reported
/// per-field via [`crate::validation::FieldError`]. The HTTP layer owns the
/// mapping of these variants to status codes and response bodies.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist (or has been soft-deleted).
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// No credential was presented, or the presented one did not verify.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but may not act on this resource.
    #[error("forbidden: {0}")]
    Forbidden(String),
}
