mod config;
mod controller;
mod state;

pub use config::{ConfigError, PlayerConfig};
pub use controller::PlayerController;
pub use state::{JumpPhase, PlayerState, Stance};
