use crate::config::MotionConfig;
use glam::{EulerRot, Mat4, Vec3};
use std::f32::consts::TAU;

/// Constant tumble of the cube about its X and Y axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
}

impl Spin {
    pub fn step(&mut self, cfg: &MotionConfig) {
        // wrapped so long sessions don't lose precision
        self.rotation.x = (self.rotation.x + cfg.spin_per_frame).rem_euclid(TAU);
        self.rotation.y = (self.rotation.y + cfg.spin_per_frame).rem_euclid(TAU);
    }

    #[inline]
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}
