use glam::Vec3;

// Tuning constants shared by the web and native frontends.

// Scroll inertia
pub const SCROLL_SENSITIVITY: f32 = 0.0007; // wheel delta (px) -> offset velocity
pub const SCROLL_DEADBAND: f32 = 0.01; // below this |velocity| snaps to zero
pub const SCROLL_DECAY: f32 = 0.50; // per-frame velocity multiplier
pub const SCROLL_LIMIT: f32 = 3.0; // target offset stays within +/- this
pub const SCROLL_SMOOTHING: f32 = 0.05; // lerp factor toward the target offset

// Pointer follow
//
// Tuned as a 0.1 lerp factor multiplied by a further 0.1. The double factor
// looks accidental, but 0.01 is the gain the motion was tuned against, so it
// is kept as one combined constant.
pub const FOLLOW_GAIN: f32 = 0.01;
pub const FOLLOW_DECAY: f32 = 0.95; // per-frame velocity multiplier, floaty on purpose

// Cube spin (radians per frame, applied to X and Y)
pub const SPIN_PER_FRAME: f32 = 0.01;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Pointer rays are intersected with the plane z = PICK_PLANE_Z
pub const PICK_PLANE_Z: f32 = 0.0;

// Viewport assumed until the host reports its real size
pub const DEFAULT_VIEWPORT: [u32; 2] = [1280, 720];

// Scene look
pub const CUBE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const LIGHT_DIRECTION: [f32; 3] = [5.0, 5.0, 5.0]; // normalized before use
pub const LIGHT_INTENSITY: f32 = 0.5;
pub const AMBIENT_LEVEL: f32 = 0.25;
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];

#[inline]
pub fn light_direction_vec3() -> Vec3 {
    Vec3::from(LIGHT_DIRECTION).normalize()
}
