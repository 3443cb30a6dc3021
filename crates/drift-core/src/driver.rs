//! Per-frame driver: drains input, runs the integrators in a fixed order and
//! hands a snapshot to the renderer.

use crate::camera::{CameraRig, Viewport};
use crate::config::{ConfigError, MotionConfig};
use crate::constants::PICK_PLANE_Z;
use crate::follow::{FollowerState, PointerTarget};
use crate::input::{InputEvent, InputReceiver};
use crate::picking;
use crate::scroll::ScrollState;
use crate::spin::Spin;
use glam::{Mat4, Vec3};
use instant::Instant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub camera: CameraRig,
    pub viewport: Viewport,
    pub cube_position: Vec3,
    pub cube_rotation: Vec3,
}

impl FrameSnapshot {
    #[inline]
    pub fn camera_y(&self) -> f32 {
        self.camera.eye.y
    }

    pub fn model_matrix(&self) -> Mat4 {
        let spin = Spin {
            rotation: self.cube_rotation,
        };
        Mat4::from_translation(self.cube_position) * spin.rotation_matrix()
    }
}

/// Consumer of finished frames, usually the GPU renderer.
pub trait FrameSink {
    type Error;

    fn present(&mut self, snapshot: &FrameSnapshot) -> Result<(), Self::Error>;
}

/// Decides when [`FrameDriver::run`] returns. Checked before every frame.
pub trait StopCondition {
    fn should_stop(&mut self, frames_run: u64) -> bool;
}

/// Shared stop flag; clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl StopCondition for CancellationToken {
    fn should_stop(&mut self, _frames_run: u64) -> bool {
        self.is_cancelled()
    }
}

/// Stop after a fixed number of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLimit(pub u64);

impl StopCondition for FrameLimit {
    fn should_stop(&mut self, frames_run: u64) -> bool {
        frames_run >= self.0
    }
}

/// Stop when the wrapped predicate returns true for the frames run so far.
pub struct StopWhen<F>(pub F);

impl<F: FnMut(u64) -> bool> StopCondition for StopWhen<F> {
    fn should_stop(&mut self, frames_run: u64) -> bool {
        (self.0)(frames_run)
    }
}

/// Rolling frames-per-second counter, logged once per second at debug level.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window_start: Instant,
    frames_in_window: u32,
    last_fps: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames_in_window: 0,
            last_fps: 0.0,
        }
    }
}

impl FrameStats {
    const WINDOW: Duration = Duration::from_secs(1);

    pub fn record(&mut self) {
        self.frames_in_window += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Self::WINDOW {
            self.last_fps = self.frames_in_window as f32 / elapsed.as_secs_f32();
            log::debug!("[frame] {:.1} fps", self.last_fps);
            self.frames_in_window = 0;
            self.window_start = Instant::now();
        }
    }

    /// Rate measured over the last completed window; 0 until one completes.
    pub fn fps(&self) -> f32 {
        self.last_fps
    }
}

pub struct FrameDriver {
    config: MotionConfig,
    scroll: ScrollState,
    pointer: PointerTarget,
    follower: FollowerState,
    spin: Spin,
    camera: CameraRig,
    viewport: Viewport,
    inbox: InputReceiver,
    frame: u64,
    stats: FrameStats,
}

impl FrameDriver {
    pub fn new(
        config: MotionConfig,
        viewport: Viewport,
        inbox: InputReceiver,
    ) -> Result<Self, ConfigError> {
        let config = config.validate().map_err(|e| {
            log::warn!("[config] rejected: {}", e);
            e
        })?;
        Ok(Self {
            camera: CameraRig::new(&config, viewport),
            config,
            scroll: ScrollState::default(),
            pointer: PointerTarget::default(),
            follower: FollowerState::default(),
            spin: Spin::default(),
            viewport,
            inbox,
            frame: 0,
            stats: FrameStats::default(),
        })
    }

    /// Run one frame: apply queued input, then scroll, follow and spin in
    /// that order.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.apply_pending_input();

        self.scroll.step(&self.config);
        self.camera.set_height(self.scroll.camera_y());

        self.follower
            .step(self.pointer.target_position, &self.config);
        self.spin.step(&self.config);

        self.frame += 1;
        self.stats.record();
        self.snapshot()
    }

    /// Tick and present until `stop` says otherwise. Returns the number of
    /// frames presented; a sink error ends the loop and is passed through.
    pub fn run<S, C>(&mut self, stop: &mut C, sink: &mut S) -> Result<u64, S::Error>
    where
        S: FrameSink,
        C: StopCondition,
    {
        let mut frames_run = 0u64;
        while !stop.should_stop(frames_run) {
            let snapshot = self.tick();
            sink.present(&snapshot)?;
            frames_run += 1;
        }
        log::debug!("[frame] run loop stopped after {} frames", frames_run);
        Ok(frames_run)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            camera: self.camera.clone(),
            viewport: self.viewport,
            cube_position: self.follower.position,
            cube_rotation: self.spin.rotation,
        }
    }

    fn apply_pending_input(&mut self) {
        // collected first so the receiver borrow ends before state is mutated
        let events: Vec<InputEvent> = self.inbox.drain().collect();
        for event in events {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::WheelDelta { delta_y } => {
                if delta_y.is_finite() {
                    self.scroll.push_wheel(delta_y, &self.config);
                } else {
                    log::debug!("[input] ignoring non-finite wheel delta");
                }
            }
            InputEvent::PointerMoved { x, y } => {
                match picking::pointer_to_plane(&self.camera, self.viewport, x, y, PICK_PLANE_Z) {
                    Some(hit) => self.pointer.target_position = hit,
                    None => log::debug!("[input] pointer ({}, {}) missed the pick plane", x, y),
                }
            }
            InputEvent::ViewportResized { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.camera.aspect = self.viewport.aspect();
                log::debug!("[input] viewport {}x{}", width, height);
            }
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn pointer(&self) -> &PointerTarget {
        &self.pointer
    }

    pub fn follower(&self) -> &FollowerState {
        &self.follower
    }

    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}
