use crate::config::MotionConfig;

/// Wheel-driven vertical camera offset with inertia and easing.
///
/// Wheel input only feeds `velocity`. Each frame the velocity is folded into
/// `target_offset` and decays, and `current_offset` eases toward the target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub target_offset: f32,
    pub current_offset: f32,
    pub velocity: f32,
}

impl ScrollState {
    /// Accumulate one wheel event. May be called any number of times between frames.
    #[inline]
    pub fn push_wheel(&mut self, delta_y: f32, cfg: &MotionConfig) {
        self.velocity += delta_y * cfg.scroll_sensitivity;
    }

    /// Advance one frame.
    pub fn step(&mut self, cfg: &MotionConfig) {
        if self.velocity.abs() > cfg.deadband {
            self.target_offset += self.velocity;
            self.velocity *= cfg.scroll_decay;
        } else {
            // hard stop, no asymptotic creep
            self.velocity = 0.0;
        }
        self.target_offset = self
            .target_offset
            .clamp(-cfg.scroll_limit, cfg.scroll_limit);
        self.current_offset = lerp(self.current_offset, self.target_offset, cfg.smoothing);
    }

    /// Camera height for the current offset; scrolling down moves the view down.
    #[inline]
    pub fn camera_y(&self) -> f32 {
        -self.current_offset
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.current_offset == self.target_offset
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
