//! # ActorClient Trait
//!
//! Common interface for resource-specific clients. Implementors supply the inner
//! [`ResourceClient`] and an error mapping; `get`, `delete` and `list` come for free.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug, Default)] struct AnyNote;
/// #[derive(Debug, thiserror::Error)]
/// enum NoteError {
///     #[error("note {0} not found")] NotFound(String),
///     #[error("{0}")] Other(String),
/// }
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Query = AnyNote;
///     type Error = NoteError;
///     fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
///     fn on_update(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
///     fn matches(&self, _: &AnyNote) -> bool { true }
/// }
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> NoteError {
///         match e {
///             FrameworkError::NotFound(id) => NoteError::NotFound(id),
///             other => NoteError::Other(other.to_string()),
///         }
///     }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get(), delete() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
///     let _ = client.list(AnyNote).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// List every entity matching `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }
}
