//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities. It is the "Server" side of the Actor Model: it processes messages one at
//! a time, so the store needs no `Mutex` even when many HTTP requests hit it at once.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever requests originate.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Tag { id: u64, label: String }
/// #[derive(Debug, Default)] struct TagQuery;
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// impl ActorEntity for Tag {
///     type Id = u64;
///     type Create = String;
///     type Update = String;
///     type Query = TagQuery;
///     type Error = TagError;
///
///     fn from_create_params(id: u64, label: String) -> Result<Self, TagError> { Ok(Self { id, label }) }
///     fn on_update(&mut self, label: String) -> Result<(), TagError> { self.label = label; Ok(()) }
///     fn matches(&self, _: &TagQuery) -> bool { true }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Tag>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run());
///
///     let tag = client.create("rust".to_string()).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
///
/// # Implementation Details
///
/// The store is an `IndexMap`, so `List` answers in insertion order and `Delete`
/// uses `shift_remove` to keep the remaining entities in that order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id_fn` - Id generator called once per `Create`. It must not repeat
    ///   ids that are still live.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // "PetEntity" instead of "pet_store::domain::pet::PetEntity"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(entity_type, params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(item.ok_or_else(|| FrameworkError::NotFound(id.to_string())));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(entity_type, id, update));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = match self.store.shift_remove(&id) {
                        Some(_) => {
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            Ok(())
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, matched = items.len(), size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, entity_type: &str, params: T::Create) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        match T::from_create_params(id.clone(), params) {
            Ok(item) => {
                self.store.insert(id.clone(), item.clone());
                info!(entity_type, %id, size = self.store.len(), "Created");
                Ok(item)
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(FrameworkError::EntityError(Box::new(e)))
            }
        }
    }

    fn update(&mut self, entity_type: &str, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut next = item.clone();
        if let Err(e) = next.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        *item = next.clone();
        info!(entity_type, %id, "Updated");
        Ok(next)
    }
}
