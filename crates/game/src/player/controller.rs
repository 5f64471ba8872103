use glam::{Quat, Vec3};

use crate::input::{Buttons, InputFrame};
use crate::math::{lerp, smooth_damp, smooth_damp_vec2};
use crate::mover::Mover;
use crate::transform::Transform;

use super::{JumpPhase, PlayerConfig, PlayerState, Stance};

const EYE_SETTLE_THRESHOLD: f32 = 0.01;

pub struct PlayerController {
    config: PlayerConfig,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl PlayerController {
    pub fn new(config: PlayerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// One tick: look, movement, speed ramp, jump phase, crouch.
    pub fn update(
        &self,
        input: &InputFrame,
        state: &mut PlayerState,
        body: &mut impl Transform,
        camera: &mut impl Transform,
        mover: &mut impl Mover,
        dt: f32,
    ) {
        self.update_look(input, state, body, camera, dt);
        self.update_movement(input, state, body, mover, dt);
        self.update_speed(input, state, dt);
        self.update_jump(input, state, mover, dt);
        self.update_crouch(input, state, camera, mover, dt);
    }

    fn update_look(
        &self,
        input: &InputFrame,
        state: &mut PlayerState,
        body: &mut impl Transform,
        camera: &mut impl Transform,
        dt: f32,
    ) {
        state.look = smooth_damp_vec2(
            state.look,
            input.look,
            &mut state.look_velocity,
            self.config.mouse_smooth_time,
            dt,
        );

        state.camera_pitch -= state.look.y * self.config.mouse_sensitivity;
        state.camera_pitch = state
            .camera_pitch
            .clamp(-self.config.pitch_limit, self.config.pitch_limit);
        camera.set_rotation(Quat::from_rotation_x(-state.camera_pitch.to_radians()));

        // Body yaws, camera only pitches.
        body.rotate_y(-(state.look.x * self.config.mouse_sensitivity).to_radians());
    }

    fn update_movement(
        &self,
        input: &InputFrame,
        state: &mut PlayerState,
        body: &impl Transform,
        mover: &mut impl Mover,
        dt: f32,
    ) {
        let target = input.movement.normalize_or_zero();
        state.move_dir = smooth_damp_vec2(
            state.move_dir,
            target,
            &mut state.move_dir_velocity,
            self.config.move_smooth_time,
            dt,
        );

        // Grounded here is the previous tick's contact state; the reset
        // happens before this tick's gravity is added.
        if mover.grounded() {
            state.vertical_velocity = 0.0;
        }
        state.vertical_velocity += self.config.gravity * dt;

        let velocity = (body.forward() * state.move_dir.y + body.right() * state.move_dir.x)
            * state.movement_speed
            + Vec3::Y * state.vertical_velocity;
        mover.move_by(velocity * dt);
    }

    fn update_speed(&self, input: &InputFrame, state: &mut PlayerState, dt: f32) {
        let target = if input.is_held(Buttons::RUN) && state.stance == Stance::Standing {
            self.config.run_speed
        } else {
            self.config.walk_speed
        };
        let blend = (self.config.run_build_up * dt).min(1.0);
        state.movement_speed = lerp(state.movement_speed, target, blend);
    }

    fn update_jump(
        &self,
        input: &InputFrame,
        state: &mut PlayerState,
        mover: &mut impl Mover,
        dt: f32,
    ) {
        if matches!(state.jump, JumpPhase::Idle)
            && input.just_pressed(Buttons::JUMP)
            && mover.grounded()
        {
            mover.set_slope_limit(self.config.slope_limit_airborne);
            state.jump = JumpPhase::Airborne { time_in_air: 0.0 };
            log::debug!("jump started");
        }

        // The first impulse lands on the trigger tick itself.
        if let JumpPhase::Airborne { time_in_air } = state.jump {
            let force = self.config.jump_curve.evaluate(time_in_air);
            mover.move_by(Vec3::Y * force * self.config.jump_multiplier * dt);

            if mover.grounded() || mover.hit_above() {
                mover.set_slope_limit(self.config.slope_limit_normal);
                state.jump = JumpPhase::Idle;
                log::debug!("jump ended after {:.2}s", time_in_air + dt);
            } else {
                state.jump = JumpPhase::Airborne {
                    time_in_air: time_in_air + dt,
                };
            }
        }
    }

    fn update_crouch(
        &self,
        input: &InputFrame,
        state: &mut PlayerState,
        camera: &mut impl Transform,
        mover: &mut impl Mover,
        dt: f32,
    ) {
        // Press and release are handled independently so both edges of a
        // single tick resolve in order.
        if input.just_pressed(Buttons::CROUCH) && state.stance == Stance::Standing {
            state.stance = Stance::Crouching;
            mover.set_crouched(true);
            log::debug!("crouching");
        }
        if input.just_released(Buttons::CROUCH) && state.stance == Stance::Crouching {
            state.stance = Stance::CrouchTransitioning;
            mover.set_crouched(false);
            log::debug!("standing up");
        }

        let anchor = match state.stance {
            Stance::Crouching => self.config.crouch_eye_height,
            Stance::Standing | Stance::CrouchTransitioning => self.config.stand_eye_height,
        };
        state.eye_height = smooth_damp(
            state.eye_height,
            anchor,
            &mut state.eye_velocity,
            self.config.crouch_smooth_time,
            dt,
        );

        if state.stance == Stance::CrouchTransitioning
            && (state.eye_height - self.config.stand_eye_height).abs() < EYE_SETTLE_THRESHOLD
        {
            state.stance = Stance::Standing;
        }

        // Lateral camera offset is left alone; only the eye height moves.
        let local = camera.position();
        camera.set_position(Vec3::new(local.x, state.eye_height, local.z));
    }
}
