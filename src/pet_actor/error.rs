//! Error types for the Pet actor.

use thiserror::Error;

/// Errors that can occur during pet registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PetError {
    /// No pet is registered under the requested id.
    #[error("Pet not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
