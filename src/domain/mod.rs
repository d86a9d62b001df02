//! Pure data structures for the registry: the pet record, the stored entity and the list filter.
//!
//! [`PetEntity`] implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`crate::pet_actor::entity`].

pub mod dob;
pub mod pet;
pub mod query;

pub use dob::*;
pub use pet::*;
pub use query::*;
