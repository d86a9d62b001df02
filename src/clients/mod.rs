//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod pet_client;

pub use pet_client::*;
