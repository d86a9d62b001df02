//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the whole process.
//!
//! The actor already emits structured events for every operation (`Created`, `Updated`,
//! `Deleted`, `Not found`, `Shutdown`) tagged with `entity_type`, `id` and the store `size`,
//! so the subscriber hides module paths (`with_target(false)`) to keep lines short.
//!
//! ```bash
//! # Default: info, or debug with --verbose
//! cargo run
//!
//! # Full payloads of every request
//! RUST_LOG=debug cargo run
//!
//! # Only the actor framework at debug
//! RUST_LOG=info,actor_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a create followed by a miss looks like:
//!
//! ```text
//! INFO Actor started entity_type="PetEntity"
//! INFO Created entity_type="PetEntity" id=5b0c... size=1
//! WARN Not found entity_type="PetEntity" id=0f3e...
//! ```
use tracing_subscriber::EnvFilter;

/// Initialise the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"info"`) is used.
/// Calling this twice is harmless: the second call leaves the first subscriber in place.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
