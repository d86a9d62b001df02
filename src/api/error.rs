use axum::http::StatusCode;

use super::problem::{Problem, ValidationViolation};
use crate::pet_actor::PetError;

/// Failures the HTTP layer reports to clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {} violation(s)", .0.len())]
    Validation(Vec<ValidationViolation>),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Pet not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render as a problem document for the request at `instance`.
    pub fn into_problem(self, instance: &str) -> Problem {
        let status = self.status();
        let problem = match self {
            ApiError::Validation(violations) => {
                Problem::new(status, "Bad Request", "Invalid request").with_errors(violations)
            }
            ApiError::BadRequest(detail) => Problem::new(status, "Bad Request", detail),
            ApiError::NotFound(_) => Problem::new(status, "Not Found", "Pet not found"),
            ApiError::Internal(cause) => {
                tracing::error!(%cause, instance, "Request failed");
                Problem::new(status, "Internal Server Error", "Internal server error occurred")
            }
        };
        problem.with_instance(instance)
    }
}

impl From<PetError> for ApiError {
    fn from(e: PetError) -> Self {
        match e {
            PetError::NotFound(id) => ApiError::NotFound(id),
            PetError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<Vec<ValidationViolation>> for ApiError {
    fn from(violations: Vec<ValidationViolation>) -> Self {
        ApiError::Validation(violations)
    }
}

impl From<ValidationViolation> for ApiError {
    fn from(violation: ValidationViolation) -> Self {
        ApiError::Validation(vec![violation])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_errors_map_to_status_codes() {
        assert_eq!(
            ApiError::from(PetError::NotFound("x".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(PetError::ActorCommunicationError("Actor closed".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_stay_out_of_the_body() {
        let problem = ApiError::Internal("Actor dropped response channel".into()).into_problem("/v1/pets");

        assert_eq!(problem.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!problem.detail.contains("Actor"));
        assert_eq!(problem.instance, "/v1/pets");
    }

    #[test]
    fn validation_lists_every_violation() {
        let problem = ApiError::from(vec![
            ValidationViolation::new("name", "must not be empty"),
            ValidationViolation::new("type", "must be one of cat, dog, rabbit"),
        ])
        .into_problem("/v1/pets");

        assert_eq!(problem.status, StatusCode::BAD_REQUEST);
        assert_eq!(problem.errors.map(|e| e.len()), Some(2));
    }
}
