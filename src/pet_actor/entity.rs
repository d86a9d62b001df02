//! [`ActorEntity`] implementation for [`PetEntity`].
//!
//! Creation and update both take a full [`Pet`] record: the actor supplies the id on
//! create, and an update swaps every other field while the id stays put.

use actor_framework::ActorEntity;
use uuid::Uuid;

use super::error::PetError;
use crate::domain::{Pet, PetEntity, PetQuery};

impl ActorEntity for PetEntity {
    type Id = Uuid;
    type Create = Pet;
    type Update = Pet;
    type Query = PetQuery;
    type Error = PetError;

    fn from_create_params(id: Uuid, params: Pet) -> Result<Self, Self::Error> {
        Ok(PetEntity::new(id, params))
    }

    fn on_update(&mut self, update: Pet) -> Result<(), Self::Error> {
        self.replace(update);
        Ok(())
    }

    fn matches(&self, query: &PetQuery) -> bool {
        query.matches(self)
    }
}
