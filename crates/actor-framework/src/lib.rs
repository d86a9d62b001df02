//! # Actor Framework
//!
//! Building blocks for keeping a collection of entities inside a single Tokio task and
//! talking to it through cheap, cloneable clients. It follows a **Resource-Oriented**
//! shape (every resource gets the same create/get/update/delete/list surface) on top of
//! the **Actor Model** (one task owns the state, everybody else sends messages).
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - your domain type: how it is built, updated and filtered
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and the insertion-ordered store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and processes messages **sequentially**,
//!   so the store needs no lock even when thousands of requests arrive at once.
//! - The request channel is bounded; callers wait when it is full.
//! - Dropping the last client ends the actor's loop.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from scripted expectations, which lets
//! callers of a client be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
