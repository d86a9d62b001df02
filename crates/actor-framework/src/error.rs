//! # Framework Errors
//!
//! Errors shared by every actor and client. Domain clients translate these into
//! their own error enums through [`ActorClient::map_error`](crate::ActorClient::map_error).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::NotFound(_))
    }
}
