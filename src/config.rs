//! Command-line and environment configuration.

use clap::builder::TypedValueParser;
use clap::Parser;

use crate::pet_actor::DEFAULT_CHANNEL_CAPACITY;

/// Pet store registry served over REST.
#[derive(Debug, Clone, Parser)]
#[command(name = "pet-store", version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "PET_STORE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PET_STORE_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Slots in the pet actor's request queue.
    #[arg(
        long,
        env = "PET_STORE_CHANNEL_CAPACITY",
        default_value_t = DEFAULT_CHANNEL_CAPACITY,
        value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize)
    )]
    pub channel_capacity: usize,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// `host:port`, resolved when the listener binds.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default filter directive for the log subscriber.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
