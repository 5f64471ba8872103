pub mod arena;
pub mod curve;
pub mod input;
pub mod math;
pub mod mover;
pub mod physics;
pub mod player;
pub mod simulation;
pub mod transform;

pub use arena::{Arena, ArenaObject};
pub use curve::{Curve, Key};
pub use input::{ButtonTracker, Buttons, InputFrame};
pub use mover::Mover;
pub use physics::{CharacterMover, PhysicsWorld};
pub use player::{ConfigError, JumpPhase, PlayerConfig, PlayerController, PlayerState, Stance};
pub use simulation::{FixedTimestep, Session};
pub use transform::{Transform, WorldTransform};
