//! # Pet Store
//!
//! An in-memory pet registry served over REST, built on the resource-actor recipe from
//! the `actor-framework` crate.
//!
//! ## Layers
//!
//! - **[`domain`]**: Plain data: the [`Pet`](domain::Pet) record, the stored
//!   [`PetEntity`](domain::PetEntity) and the [`PetQuery`](domain::PetQuery) filter.
//! - **[`pet_actor`]**: The [`ActorEntity`](actor_framework::ActorEntity) implementation
//!   and the actor factory. One Tokio task owns every pet; requests queue on its channel
//!   and run one at a time, so no locks are involved.
//! - **[`clients`]**: [`PetClient`](clients::PetClient), the typed handle the rest of the
//!   application uses instead of raw messages.
//! - **[`lifecycle`]**: [`PetSystem`](lifecycle::PetSystem) starts the actor and waits for
//!   it on shutdown.
//! - **[`api`]**: Axum router, validation, RFC 9457 problem responses and the OpenAPI
//!   document.
//! - **[`config`]**: Command-line flags with environment fallbacks.
//!
//! ## Routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `POST` | `/v1/pets` | 201, stored pet |
//! | `GET` | `/v1/pets` | 200, filtered list |
//! | `GET` | `/v1/pets/{id}` | 200, pet |
//! | `PUT` | `/v1/pets/{id}` | 200, updated pet |
//! | `DELETE` | `/v1/pets/{id}` | 200, empty body |
//! | `GET` | `/v1/pets/up` | 200, liveness text |
//! | `GET` | `/api-json` | 200, OpenAPI document |
//!
//! ### Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 3000
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod domain;
pub mod lifecycle;
pub mod pet_actor;
