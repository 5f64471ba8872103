use glam::Vec2;

use super::PlayerConfig;

/// Locomotion stance. `CrouchTransitioning` covers standing back up while
/// the camera is still settling; running requires `Standing` and crouch
/// edges are ignored until the transition resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Standing,
    Crouching,
    CrouchTransitioning,
}

/// Jump phase, advanced once per tick by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpPhase {
    Idle,
    Airborne { time_in_air: f32 },
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub movement_speed: f32,
    pub vertical_velocity: f32,

    /// Camera pitch in degrees, positive looking down.
    pub camera_pitch: f32,

    pub look: Vec2,
    pub look_velocity: Vec2,

    pub move_dir: Vec2,
    pub move_dir_velocity: Vec2,

    /// Smoothed camera height above the feet. The velocity term is carried
    /// across ticks; resetting it each call would defeat the damping.
    pub eye_height: f32,
    pub eye_velocity: f32,

    pub stance: Stance,
    pub jump: JumpPhase,
}

impl PlayerState {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            movement_speed: 0.0,
            vertical_velocity: 0.0,
            camera_pitch: 0.0,
            look: Vec2::ZERO,
            look_velocity: Vec2::ZERO,
            move_dir: Vec2::ZERO,
            move_dir_velocity: Vec2::ZERO,
            eye_height: config.stand_eye_height,
            eye_velocity: 0.0,
            stance: Stance::Standing,
            jump: JumpPhase::Idle,
        }
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self.jump, JumpPhase::Airborne { .. })
    }
}
