//! Startup and shutdown of the actor that backs the registry.

pub mod pet_system;

pub use pet_system::PetSystem;
