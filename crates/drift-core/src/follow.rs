use crate::config::MotionConfig;
use glam::Vec3;

/// Latest cursor-to-plane hit; overwritten on every pointer move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTarget {
    pub target_position: Vec3,
}

/// Position and velocity of the object chasing the pointer target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowerState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl FollowerState {
    /// Advance one frame toward `target`.
    ///
    /// Only X and Y are pulled toward the target. There is no deadband, so a
    /// small residual oscillation can persist.
    pub fn step(&mut self, target: Vec3, cfg: &MotionConfig) {
        let delta = target - self.position;
        self.velocity.x += delta.x * cfg.follow_gain;
        self.velocity.y += delta.y * cfg.follow_gain;
        self.velocity *= cfg.follow_decay;
        self.position += self.velocity;
    }

    /// Straight-line distance left to `target` in the XY plane.
    #[inline]
    pub fn distance_xy(&self, target: Vec3) -> f32 {
        (target - self.position).truncate().length()
    }
}
