//! Pet-specific resource logic: the entity implementation, its errors and the actor factory.

pub mod entity;
pub mod error;

pub use error::*;

use actor_framework::ResourceActor;

use crate::clients::PetClient;
use crate::domain::PetEntity;

/// Default capacity of the pet actor's request channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Creates a new Pet actor and its client. Ids are random UUID v4 values.
pub fn new(channel_capacity: usize) -> (ResourceActor<PetEntity>, PetClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity, uuid::Uuid::new_v4);
    let client = PetClient::new(generic_client);

    (actor, client)
}
