//! Filtering rules for listing pets.

use super::dob::DateOfBirth;
use super::pet::{PetEntity, PetType};

/// Equality filter over pet fields. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetQuery {
    pub pet_type: Option<PetType>,
    pub name: Option<String>,
    pub dob: Option<DateOfBirth>,
    pub species: Option<String>,
}

impl PetQuery {
    /// True when `pet` satisfies every field that is set.
    ///
    /// Text compares case-insensitively, dates by calendar day. Day matching stands in
    /// for a proper range filter.
    pub fn matches(&self, pet: &PetEntity) -> bool {
        self.pet_type.map_or(true, |t| t == pet.pet_type)
            && self.dob.as_ref().map_or(true, |d| d.same_day(&pet.dob))
            && self.name.as_deref().map_or(true, |n| text_eq(n, &pet.name))
            && self.species.as_deref().map_or(true, |s| text_eq(s, &pet.species))
    }
}

/// Case-insensitive equality ignoring surrounding whitespace.
pub fn text_eq(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pet;
    use uuid::Uuid;

    fn entity(pet_type: PetType, name: &str, dob: &str, species: &str) -> PetEntity {
        PetEntity::new(
            Uuid::new_v4(),
            Pet {
                pet_type,
                name: name.into(),
                dob: DateOfBirth::parse(dob).unwrap(),
                species: species.into(),
            },
        )
    }

    #[test]
    fn text_eq_ignores_case_and_padding() {
        assert!(text_eq("hello", "hello"));
        assert!(text_eq("Hello", "hello"));
        assert!(text_eq("HELLO", "hello"));
        assert!(text_eq("  Poodle ", "poodle"));
        assert!(!text_eq("hello", "bye"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = PetQuery::default();
        assert!(query.matches(&entity(PetType::Cat, "Tom", "2020-01-01", "siamese")));
    }

    #[test]
    fn every_set_field_must_match() {
        let joe = entity(PetType::Dog, "Joe", "2022-06-23T08:59:34.338Z", "poodle");

        let by_type = PetQuery {
            pet_type: Some(PetType::Dog),
            ..Default::default()
        };
        assert!(by_type.matches(&joe));

        let wrong_type = PetQuery {
            pet_type: Some(PetType::Cat),
            ..Default::default()
        };
        assert!(!wrong_type.matches(&joe));

        let all = PetQuery {
            pet_type: Some(PetType::Dog),
            name: Some("JOE".into()),
            dob: Some(DateOfBirth::parse("2022-06-23T23:00:00Z").unwrap()),
            species: Some("Poodle".into()),
        };
        assert!(all.matches(&joe));

        let other_day = PetQuery {
            name: Some("joe".into()),
            dob: Some(DateOfBirth::parse("2022-06-24").unwrap()),
            ..Default::default()
        };
        assert!(!other_day.matches(&joe));
    }
}
