//! HTTP surface of the registry: routing, handlers, request validation and problem responses.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod problem;
pub mod routes;
pub mod validation;

pub use error::ApiError;
pub use openapi::ApiDoc;
pub use problem::{Problem, ValidationViolation, APPLICATION_PROBLEM_JSON};
pub use routes::build_router;
