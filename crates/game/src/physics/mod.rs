mod mover;
mod world;

pub use mover::CharacterMover;
pub use world::PhysicsWorld;
