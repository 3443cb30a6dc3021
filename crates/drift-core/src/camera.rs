//! Viewport and camera types shared with the frontends.
//!
//! These avoid platform-specific APIs; the renderer builds its matrices from
//! them and picking casts rays through them.

use crate::config::MotionConfig;
use crate::constants::{CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_VIEWPORT};
use glam::{Mat4, Vec2, Vec3};

/// Drawable size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT[0], DEFAULT_VIEWPORT[1])
    }
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Map pixel coordinates (origin top-left, y down) to normalized device
    /// coordinates in [-1, 1] with y up. `None` for an empty viewport.
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let ndc_x = (x / self.width as f32) * 2.0 - 1.0;
        let ndc_y = -(y / self.height as f32) * 2.0 + 1.0;
        Some(Vec2::new(ndc_x, ndc_y))
    }
}

/// Right-handed perspective camera looking down -Z with +Y up.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn new(cfg: &MotionConfig, viewport: Viewport) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, cfg.camera_z),
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: cfg.fovy_radians,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    #[inline]
    pub fn set_height(&mut self, y: f32) {
        self.eye.y = y;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
