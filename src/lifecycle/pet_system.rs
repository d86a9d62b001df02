use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::PetClient;

/// Owns the running pet actor and hands out the client that talks to it.
///
/// # Example
///
/// ```ignore
/// let system = PetSystem::new(32);
/// let pet = system.pet_client.add(pet).await?;
///
/// // Every client clone must be dropped before the actor can stop.
/// system.shutdown().await?;
/// ```
pub struct PetSystem {
    /// Client for interacting with the Pet actor.
    pub pet_client: PetClient,

    handle: JoinHandle<()>,
}

impl PetSystem {
    /// Spawn the pet actor with a request channel of `channel_capacity` slots.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(channel_capacity: usize) -> Self {
        let (pet_actor, pet_client) = crate::pet_actor::new(channel_capacity);
        let handle = tokio::spawn(pet_actor.run());

        Self { pet_client, handle }
    }

    /// Drop our client and wait for the actor to drain its queue and exit.
    ///
    /// The actor stops once every clone of the client is gone, so callers must release
    /// their own clones (the HTTP router included) first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.pet_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
