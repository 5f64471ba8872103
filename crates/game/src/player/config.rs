use serde::{Deserialize, Serialize};

use crate::curve::Curve;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("crouch height must be below standing height")]
    CrouchHeight,
    #[error("crouch eye height must be below standing eye height")]
    CrouchEyeHeight,
    #[error("pitch limit must be between 0 and 90 degrees")]
    PitchLimit,
    #[error("jump curve needs at least one key, sorted by time")]
    JumpCurve,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Degrees of rotation per smoothed device unit.
    pub mouse_sensitivity: f32,
    pub mouse_smooth_time: f32,
    pub move_smooth_time: f32,

    pub walk_speed: f32,
    pub run_speed: f32,
    pub run_build_up: f32,

    pub gravity: f32,

    pub jump_multiplier: f32,
    pub jump_curve: Curve,

    pub pitch_limit: f32,

    pub slope_limit_normal: f32,
    pub slope_limit_airborne: f32,

    pub radius: f32,
    pub stand_height: f32,
    pub crouch_height: f32,

    /// Camera anchors, measured from the feet.
    pub stand_eye_height: f32,
    pub crouch_eye_height: f32,
    pub crouch_smooth_time: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 2.0,
            mouse_smooth_time: 0.03,
            move_smooth_time: 0.3,

            walk_speed: 6.0,
            run_speed: 12.0,
            run_build_up: 4.0,

            gravity: -13.0,

            jump_multiplier: 10.0,
            jump_curve: Curve::jump_fall_off(),

            pitch_limit: 85.0,

            slope_limit_normal: 45.0,
            slope_limit_airborne: 90.0,

            radius: 0.3,
            stand_height: 1.8,
            crouch_height: 0.9,

            stand_eye_height: 1.6,
            crouch_eye_height: 0.8,
            crouch_smooth_time: 0.3,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            (self.mouse_sensitivity, "mouse_sensitivity"),
            (self.mouse_smooth_time, "mouse_smooth_time"),
            (self.move_smooth_time, "move_smooth_time"),
            (self.walk_speed, "walk_speed"),
            (self.run_speed, "run_speed"),
            (self.run_build_up, "run_build_up"),
            (self.jump_multiplier, "jump_multiplier"),
            (self.radius, "radius"),
            (self.stand_height, "stand_height"),
            (self.crouch_height, "crouch_height"),
            (self.stand_eye_height, "stand_eye_height"),
            (self.crouch_eye_height, "crouch_eye_height"),
            (self.crouch_smooth_time, "crouch_smooth_time"),
        ];
        for (value, name) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive(name));
            }
        }

        if self.crouch_height >= self.stand_height {
            return Err(ConfigError::CrouchHeight);
        }
        if self.crouch_eye_height >= self.stand_eye_height {
            return Err(ConfigError::CrouchEyeHeight);
        }
        if self.pitch_limit <= 0.0 || self.pitch_limit >= 90.0 {
            return Err(ConfigError::PitchLimit);
        }
        if !self.jump_curve.is_valid() {
            return Err(ConfigError::JumpCurve);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Key;

    #[test]
    fn default_config_is_valid() {
        assert!(PlayerConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_smooth_time() {
        let config = PlayerConfig {
            mouse_smooth_time: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive("mouse_smooth_time"))
        ));
    }

    #[test]
    fn rejects_crouch_taller_than_stand() {
        let config = PlayerConfig {
            crouch_height: 2.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::CrouchHeight)));
    }

    #[test]
    fn rejects_unsorted_jump_curve() {
        let config = PlayerConfig {
            jump_curve: Curve::new(vec![Key::new(1.0, 0.0), Key::new(0.0, 1.0)]),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::JumpCurve)));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: PlayerConfig = toml::from_str("walk_speed = 4.5\n").unwrap();
        assert_eq!(config.walk_speed, 4.5);
        assert_eq!(config.run_speed, PlayerConfig::default().run_speed);
    }
}
