use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dob::DateOfBirth;

/// Kind of animal the registry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Cat,
    Dog,
    Rabbit,
}

impl PetType {
    pub const ALL: [PetType; 3] = [PetType::Cat, PetType::Dog, PetType::Rabbit];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Cat => "cat",
            PetType::Dog => "dog",
            PetType::Rabbit => "rabbit",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pet type {0:?}, expected one of cat, dog, rabbit")]
pub struct UnknownPetType(pub String);

impl FromStr for PetType {
    type Err = UnknownPetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPetType(s.to_string()))
    }
}

/// A pet record as submitted by clients: everything except the id.
///
/// This is both the create and the update payload of the pet actor; an update replaces
/// every field at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    /// Type of pet.
    #[serde(rename = "type")]
    pub pet_type: PetType,
    /// Name of the pet.
    #[schema(example = "Joe")]
    pub name: String,
    /// Date of birth of the pet.
    #[schema(value_type = String, format = DateTime, example = "2022-06-23T08:59:34.338Z")]
    pub dob: DateOfBirth,
    /// Species of the pet type.
    #[schema(example = "poodle")]
    pub species: String,
}

/// A stored pet: a [`Pet`] plus the id the registry assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PetEntity {
    /// Unique pet identifier (UUID v4).
    pub id: Uuid,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    #[schema(example = "Joe")]
    pub name: String,
    #[schema(value_type = String, format = DateTime, example = "2022-06-23T08:59:34.338Z")]
    pub dob: DateOfBirth,
    #[schema(example = "poodle")]
    pub species: String,
}

impl PetEntity {
    pub fn new(id: Uuid, pet: Pet) -> Self {
        Self {
            id,
            pet_type: pet.pet_type,
            name: pet.name,
            dob: pet.dob,
            species: pet.species,
        }
    }

    /// Overwrite every field but the id.
    pub fn replace(&mut self, pet: Pet) {
        *self = PetEntity::new(self.id, pet);
    }

    /// The record without its id.
    pub fn record(&self) -> Pet {
        Pet {
            pet_type: self.pet_type,
            name: self.name.clone(),
            dob: self.dob.clone(),
            species: self.species.clone(),
        }
    }
}
