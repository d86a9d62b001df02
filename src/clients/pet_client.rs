use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::{Pet, PetEntity};
use crate::pet_actor::PetError;

/// Client for interacting with the Pet actor.
///
/// `get`, `delete` and `list` come from [`ActorClient`]; `add` and `update` are spelled
/// out here because they carry a full record.
#[derive(Clone)]
pub struct PetClient {
    inner: ResourceClient<PetEntity>,
}

impl PetClient {
    pub fn new(inner: ResourceClient<PetEntity>) -> Self {
        Self { inner }
    }

    /// Register a new pet under a freshly generated id.
    #[instrument(skip(self, pet), fields(name = %pet.name))]
    pub async fn add(&self, pet: Pet) -> Result<PetEntity, PetError> {
        debug!(?pet, "Sending request");
        self.inner.create(pet).await.map_err(Self::map_error)
    }

    /// Replace every field of the pet stored under `id`.
    #[instrument(skip(self, pet))]
    pub async fn update(&self, id: Uuid, pet: Pet) -> Result<PetEntity, PetError> {
        debug!(?pet, "Sending request");
        self.inner.update(id, pet).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<PetEntity> for PetClient {
    type Error = PetError;

    fn inner(&self) -> &ResourceClient<PetEntity> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => PetError::NotFound(id),
            other => PetError::ActorCommunicationError(other.to_string()),
        }
    }
}
