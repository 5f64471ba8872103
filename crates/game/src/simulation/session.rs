use glam::Vec3;

use crate::input::InputFrame;
use crate::mover::Mover;
use crate::physics::{CharacterMover, PhysicsWorld};
use crate::player::{ConfigError, PlayerConfig, PlayerController, PlayerState};
use crate::transform::WorldTransform;

use super::FixedTimestep;

/// Owns one player's controller, state, transforms and mover, and stands in
/// for the host engine's update loop. `spawn` is the body origin, the
/// center of the standing shape.
pub struct Session {
    controller: PlayerController,
    state: PlayerState,
    body: WorldTransform,
    camera: WorldTransform,
    mover: CharacterMover,
    timestep: FixedTimestep,
}

impl Session {
    pub fn new(
        config: PlayerConfig,
        world: PhysicsWorld,
        spawn: Vec3,
        tick_rate: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = PlayerState::new(&config);
        let camera = WorldTransform::new(Vec3::new(0.0, config.stand_eye_height, 0.0));
        let mover = CharacterMover::spawn(world, spawn, &config);

        Ok(Self {
            controller: PlayerController::new(config),
            state,
            body: WorldTransform::new(spawn),
            camera,
            mover,
            timestep: FixedTimestep::new(tick_rate),
        })
    }

    pub fn config(&self) -> &PlayerConfig {
        self.controller.config()
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn body(&self) -> &WorldTransform {
        &self.body
    }

    pub fn camera(&self) -> &WorldTransform {
        &self.camera
    }

    pub fn mover(&self) -> &CharacterMover {
        &self.mover
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// Camera position in world space: feet plus the smoothed eye height.
    pub fn eye_position(&self) -> Vec3 {
        let feet = self.body.position - Vec3::Y * (self.config().stand_height / 2.0);
        feet + self.camera.position
    }

    /// Runs exactly one fixed tick.
    pub fn tick(&mut self, input: &InputFrame) {
        let dt = self.timestep.dt();
        self.controller.update(
            input,
            &mut self.state,
            &mut self.body,
            &mut self.camera,
            &mut self.mover,
            dt,
        );
        self.mover.step();
        self.body.position = self.mover.position();
    }

    /// Feeds a wall-clock delta through the fixed timestep, running as many
    /// ticks as it covers. Returns the number of ticks run.
    pub fn advance(&mut self, delta: f32, input: &InputFrame) -> u32 {
        self.timestep.accumulate(delta);

        let mut ticks_run = 0;
        while self.timestep.consume_tick() {
            self.tick(input);
            ticks_run += 1;
        }
        ticks_run
    }

    pub fn interpolation_alpha(&self) -> f32 {
        self.timestep.alpha()
    }
}
