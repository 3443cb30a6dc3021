//! Validated motion tuning.
//!
//! Every smoothing and decay factor is a per-frame multiplier, so values
//! outside (0, 1) make the integrators diverge or never settle. They are
//! rejected once at startup instead of being clamped silently.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("{name} must lie strictly between 0 and 1, got {value}")]
    OutsideUnitInterval { name: &'static str, value: f32 },
    #[error("{name} must be finite and greater than 0, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("vertical field of view must lie in (0, pi) radians, got {0}")]
    FieldOfView(f32),
}

/// Per-frame tuning for the scroll, follow and spin integrators plus the
/// camera they drive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub scroll_sensitivity: f32,
    pub deadband: f32,
    pub scroll_decay: f32,
    pub scroll_limit: f32,
    pub smoothing: f32,
    pub follow_gain: f32,
    pub follow_decay: f32,
    pub spin_per_frame: f32,
    pub fovy_radians: f32,
    pub camera_z: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scroll_sensitivity: SCROLL_SENSITIVITY,
            deadband: SCROLL_DEADBAND,
            scroll_decay: SCROLL_DECAY,
            scroll_limit: SCROLL_LIMIT,
            smoothing: SCROLL_SMOOTHING,
            follow_gain: FOLLOW_GAIN,
            follow_decay: FOLLOW_DECAY,
            spin_per_frame: SPIN_PER_FRAME,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            camera_z: CAMERA_Z,
        }
    }
}

impl MotionConfig {
    /// Check every constant, returning the config unchanged when all pass.
    pub fn validate(self) -> Result<Self, ConfigError> {
        unit_interval("smoothing", self.smoothing)?;
        unit_interval("scroll_decay", self.scroll_decay)?;
        unit_interval("follow_gain", self.follow_gain)?;
        unit_interval("follow_decay", self.follow_decay)?;
        positive("scroll_sensitivity", self.scroll_sensitivity)?;
        positive("deadband", self.deadband)?;
        positive("scroll_limit", self.scroll_limit)?;
        positive("camera_z", self.camera_z)?;
        if !self.spin_per_frame.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "spin_per_frame",
                value: self.spin_per_frame,
            });
        }
        let fov = self.fovy_radians;
        if !(fov.is_finite() && fov > 0.0 && fov < std::f32::consts::PI) {
            return Err(ConfigError::FieldOfView(fov));
        }
        Ok(self)
    }
}

fn unit_interval(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutsideUnitInterval { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
