//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// The client holds only a channel sender, so cloning is cheap and clones can be
/// handed to every request handler. When the last clone is dropped the actor's
/// loop ends.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: a derive would demand `T: Clone` on the request type too.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Create { params, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Get { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Delete { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self, query: T::Query) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::List { query, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    async fn send(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
