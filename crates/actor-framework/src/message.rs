//! # Generic Messages
//!
//! Message types exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// The variants map onto the resource lifecycle:
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`] and returns it with its fresh id.
/// - **Get**: point lookup. Missing ids answer [`FrameworkError::NotFound`].
/// - **Update**: applies [`ActorEntity::Update`] and returns the new state.
/// - **Delete**: removes the entity.
/// - **List**: every entity matching [`ActorEntity::Query`], in insertion order.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
