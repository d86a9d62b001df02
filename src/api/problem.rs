//! RFC 9457 Problem Details, the body of every error response.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem", description = "RFC 9457 Problem Details for HTTP APIs")]
#[must_use]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code"
    )]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// The request path that produced the problem.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance: String,
    /// Field-level violations for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationViolation>>,
}

/// Individual validation violation for a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(title = "ValidationViolation")]
pub struct ValidationViolation {
    /// Field name, e.g. "dob" or "id".
    pub field: String,
    /// Human-readable message describing the validation error.
    pub message: String,
}

impl ValidationViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: title.into(),
            status,
            detail: detail.into(),
            instance: String::new(),
            errors: None,
        }
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_errors(mut self, errors: Vec<ValidationViolation>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_status_as_u16_and_skips_empty_fields() {
        let p = Problem::new(StatusCode::NOT_FOUND, "Not Found", "Pet not found");
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["status"], 404);
        assert_eq!(json["type"], "about:blank");
        assert!(json.get("instance").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn carries_violations() {
        let p = Problem::new(StatusCode::BAD_REQUEST, "Bad Request", "Invalid request")
            .with_instance("/v1/pets")
            .with_errors(vec![ValidationViolation::new("name", "must not be empty")]);

        let back: Problem = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back.status, StatusCode::BAD_REQUEST);
        assert_eq!(back.instance, "/v1/pets");
        assert_eq!(back.errors.unwrap()[0].field, "name");
    }

    #[test]
    fn response_uses_problem_content_type() {
        let resp = Problem::new(StatusCode::BAD_REQUEST, "Bad Request", "nope").into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_PROBLEM_JSON
        );
    }
}
