//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource must satisfy to be kept by a
//! [`ResourceActor`](crate::ResourceActor). It names the identifier, the create and update
//! payloads, the query used for listing, and the error type, and it supplies the three
//! pieces of entity logic the actor cannot know on its own: how to build an entity,
//! how to apply an update, and whether an entity satisfies a query.
//!
//! We use associated types so that a `Pet` actor only ever accepts a `Pet` payload.
//! Sending the wrong DTO to the wrong actor is a compile error.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// The actor owns identity: it generates `Id` values and hands them to
/// [`from_create_params`](ActorEntity::from_create_params). The entity never picks its own id.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g. `Uuid`, `u64`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Filter accepted by `List`. `Default` must match every entity.
    type Query: Send + Sync + Debug + Default;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the generated id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update in place.
    ///
    /// The actor calls this on a copy and only commits the copy on `Ok`, so an
    /// implementation may bail out halfway without corrupting the store.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether this entity satisfies `query`.
    fn matches(&self, query: &Self::Query) -> bool;
}
