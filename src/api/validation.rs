//! Request payloads as they arrive, and the checks that turn them into domain values.
//!
//! Every field is read as optional text so a bad request reports all of its problems at
//! once instead of failing on the first serde error.

use serde::Deserialize;
use utoipa::IntoParams;
use uuid::fmt::Hyphenated;
use uuid::{Uuid, Version};

use super::problem::ValidationViolation;
use crate::domain::{DateOfBirth, Pet, PetQuery, PetType};

/// Body of `POST /v1/pets` and `PUT /v1/pets/{id}`. Unknown fields (such as `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetPayload {
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub name: Option<String>,
    pub dob: Option<String>,
    pub species: Option<String>,
}

/// Filters accepted by `GET /v1/pets`. Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PetQueryParams {
    /// Type of pet.
    #[serde(rename = "type")]
    #[param(value_type = Option<PetType>)]
    pub pet_type: Option<String>,
    /// Name of the pet, compared case-insensitively.
    pub name: Option<String>,
    /// Any instant on the day of birth.
    #[param(value_type = Option<String>, format = DateTime)]
    pub dob: Option<String>,
    /// Species of the pet type, compared case-insensitively.
    pub species: Option<String>,
}

/// Check a full pet record. Returns every violation found.
pub fn validate_pet(payload: PetPayload) -> Result<Pet, Vec<ValidationViolation>> {
    let pet_type = payload
        .pet_type
        .as_deref()
        .ok_or_else(|| missing("type"))
        .and_then(parse_type);
    let name = required_text("name", payload.name);
    let dob = payload.dob.as_deref().ok_or_else(|| missing("dob")).and_then(parse_dob);
    let species = required_text("species", payload.species);

    match (pet_type, name, dob, species) {
        (Ok(pet_type), Ok(name), Ok(dob), Ok(species)) => Ok(Pet {
            pet_type,
            name,
            dob,
            species,
        }),
        (pet_type, name, dob, species) => Err([pet_type.err(), name.err(), dob.err(), species.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

/// Check list filters. Blank parameters are dropped before parsing.
pub fn validate_query(params: PetQueryParams) -> Result<PetQuery, Vec<ValidationViolation>> {
    let pet_type = non_blank(params.pet_type).as_deref().map(parse_type).transpose();
    let dob = non_blank(params.dob).as_deref().map(parse_dob).transpose();

    match (pet_type, dob) {
        (Ok(pet_type), Ok(dob)) => Ok(PetQuery {
            pet_type,
            name: non_blank(params.name),
            dob,
            species: non_blank(params.species),
        }),
        (pet_type, dob) => Err([pet_type.err(), dob.err()].into_iter().flatten().collect()),
    }
}

/// Parse a path id. Only UUID v4 values in the hyphenated form can name a pet.
pub fn parse_pet_id(raw: &str) -> Result<Uuid, ValidationViolation> {
    if raw.len() != Hyphenated::LENGTH {
        return Err(ValidationViolation::new("id", "must be a UUID v4"));
    }
    match Uuid::parse_str(raw) {
        Ok(id) if id.get_version() == Some(Version::Random) => Ok(id),
        _ => Err(ValidationViolation::new("id", "must be a UUID v4")),
    }
}

fn parse_type(value: &str) -> Result<PetType, ValidationViolation> {
    value.parse().map_err(|_| {
        let allowed: Vec<&str> = PetType::ALL.iter().map(PetType::as_str).collect();
        ValidationViolation::new("type", format!("must be one of {}", allowed.join(", ")))
    })
}

fn parse_dob(value: &str) -> Result<DateOfBirth, ValidationViolation> {
    DateOfBirth::parse(value).map_err(|_| ValidationViolation::new("dob", "must be a valid date/time"))
}

fn required_text(field: &str, value: Option<String>) -> Result<String, ValidationViolation> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(ValidationViolation::new(field, "must not be empty")),
        None => Err(missing(field)),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn missing(field: &str) -> ValidationViolation {
    ValidationViolation::new(field, "is required")
}
