// Host-side tests for the frame driver: input ordering, run loop and stop conditions.

use drift_core::picking::pointer_to_plane;
use drift_core::*;
use glam::Vec3;
use std::thread;

fn make_driver() -> (InputSender, FrameDriver) {
    let (input, inbox) = input_channel();
    let driver = FrameDriver::new(MotionConfig::default(), Viewport::new(1280, 720), inbox)
        .expect("default config is valid");
    (input, driver)
}

#[derive(Default)]
struct Recorder {
    frames: Vec<FrameSnapshot>,
    fail_on: Option<usize>,
    cancel_after: Option<(usize, CancellationToken)>,
}

#[derive(Debug, PartialEq)]
struct SurfaceGone;

impl FrameSink for Recorder {
    type Error = SurfaceGone;

    fn present(&mut self, snapshot: &FrameSnapshot) -> Result<(), SurfaceGone> {
        if self.fail_on == Some(self.frames.len()) {
            return Err(SurfaceGone);
        }
        self.frames.push(snapshot.clone());
        if let Some((n, token)) = &self.cancel_after {
            if self.frames.len() >= *n {
                token.cancel();
            }
        }
        Ok(())
    }
}

#[test]
fn invalid_config_is_rejected_at_startup() {
    let (_input, inbox) = input_channel();
    let cfg = MotionConfig {
        smoothing: 0.0,
        ..MotionConfig::default()
    };
    let err = FrameDriver::new(cfg, Viewport::default(), inbox).err();
    assert_eq!(
        err,
        Some(ConfigError::OutsideUnitInterval {
            name: "smoothing",
            value: 0.0
        })
    );
}

#[test]
fn wheel_event_applies_on_next_tick() {
    let (input, mut driver) = make_driver();
    input.wheel(100.0);
    // nothing moves until the driver ticks
    assert_eq!(driver.scroll().velocity, 0.0);

    let snap = driver.tick();
    assert!((driver.scroll().target_offset - 0.07).abs() < 1e-6);
    assert!((driver.scroll().velocity - 0.035).abs() < 1e-6);
    assert!((snap.camera_y() + 0.0035).abs() < 1e-6);
    assert_eq!(snap.camera.eye.y, driver.camera().eye.y);
}

#[test]
fn pointer_pick_uses_camera_from_previous_frame() {
    let (input, mut driver) = make_driver();
    let expected = pointer_to_plane(
        driver.camera(),
        driver.viewport(),
        960.0,
        180.0,
        PICK_PLANE_Z,
    )
    .unwrap();

    // wheel queued first still does not move the camera before the pick
    input.wheel(2_000.0);
    input.pointer_moved(960.0, 180.0);
    driver.tick();

    let target = driver.pointer().target_position;
    assert!((target - expected).length() < 1e-5);
    assert!(target.x > 0.0 && target.y > 0.0);

    // one follow step: velocity = delta * 0.01 * 0.95
    let pos = driver.follower().position;
    assert!((pos.x - expected.x * 0.0095).abs() < 1e-5);
    assert!((pos.y - expected.y * 0.0095).abs() < 1e-5);
    assert_eq!(pos.z, 0.0);
}

#[test]
fn cube_drifts_to_pointer_over_time() {
    let (input, mut driver) = make_driver();
    input.pointer_moved(320.0, 540.0);
    driver.tick();
    let target = driver.pointer().target_position;
    for _ in 0..2_000 {
        driver.tick();
    }
    assert!(driver.follower().distance_xy(target) < 1e-3);
    let snap = driver.snapshot();
    assert_eq!(snap.cube_position, driver.follower().position);
}

#[test]
fn resize_updates_viewport_and_aspect() {
    let (input, mut driver) = make_driver();
    input.resized(800, 800);
    let snap = driver.tick();
    assert_eq!(snap.viewport, Viewport::new(800, 800));
    assert!((driver.camera().aspect - 1.0).abs() < 1e-6);
}

#[test]
fn pointer_on_empty_viewport_keeps_previous_target() {
    let (input, mut driver) = make_driver();
    input.pointer_moved(100.0, 100.0);
    driver.tick();
    let before = driver.pointer().target_position;
    assert_ne!(before, Vec3::ZERO);

    input.resized(0, 0);
    input.pointer_moved(5.0, 5.0);
    driver.tick();
    assert_eq!(driver.pointer().target_position, before);
}

#[test]
fn non_finite_wheel_delta_is_ignored() {
    let (input, mut driver) = make_driver();
    input.wheel(f32::NAN);
    input.wheel(f32::INFINITY);
    driver.tick();
    assert_eq!(*driver.scroll(), ScrollState::default());
}

#[test]
fn spin_advances_every_frame() {
    let (_input, mut driver) = make_driver();
    for _ in 0..3 {
        driver.tick();
    }
    let r = driver.spin().rotation;
    assert!((r.x - 0.03).abs() < 1e-6);
    assert!((r.y - 0.03).abs() < 1e-6);
    assert_eq!(r.z, 0.0);
}

#[test]
fn model_matrix_places_cube_at_follower() {
    let (input, mut driver) = make_driver();
    input.pointer_moved(1000.0, 100.0);
    for _ in 0..30 {
        driver.tick();
    }
    let snap = driver.snapshot();
    let origin = snap.model_matrix().transform_point3(Vec3::ZERO);
    assert!((origin - snap.cube_position).length() < 1e-6);
}

#[test]
fn run_stops_after_frame_limit() {
    let (_input, mut driver) = make_driver();
    let mut sink = Recorder::default();
    let frames = driver.run(&mut FrameLimit(10), &mut sink).unwrap();
    assert_eq!(frames, 10);
    assert_eq!(sink.frames.len(), 10);
    let numbers: Vec<u64> = sink.frames.iter().map(|f| f.frame).collect();
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
}

#[test]
fn run_stops_when_token_is_cancelled() {
    let (_input, mut driver) = make_driver();
    let token = CancellationToken::new();
    let mut sink = Recorder {
        cancel_after: Some((5, token.clone())),
        ..Default::default()
    };
    let mut stop = token.clone();
    let frames = driver.run(&mut stop, &mut sink).unwrap();
    assert_eq!(frames, 5);
    assert!(token.is_cancelled());
}

#[test]
fn cancelled_token_runs_no_frames() {
    let (_input, mut driver) = make_driver();
    let mut token = CancellationToken::new();
    token.cancel();
    let mut sink = Recorder::default();
    assert_eq!(driver.run(&mut token, &mut sink), Ok(0));
    assert_eq!(driver.frame(), 0);
}

#[test]
fn run_with_predicate_sees_frames_so_far() {
    let (input, mut driver) = make_driver();
    let mut sink = Recorder::default();
    let mut seen: Vec<u64> = Vec::new();
    input.wheel(100.0);
    let frames = driver
        .run(
            &mut StopWhen(|n: u64| {
                seen.push(n);
                n == 3
            }),
            &mut sink,
        )
        .unwrap();
    assert_eq!(frames, 3);
    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert!(driver.scroll().target_offset > 0.0);
}

#[test]
fn sink_error_ends_the_run() {
    let (_input, mut driver) = make_driver();
    let mut sink = Recorder {
        fail_on: Some(2),
        ..Default::default()
    };
    let result = driver.run(&mut FrameLimit(100), &mut sink);
    assert_eq!(result, Err(SurfaceGone));
    assert_eq!(sink.frames.len(), 2);
    assert_eq!(driver.frame(), 3);
}

#[test]
fn events_from_other_threads_arrive_in_one_batch() {
    let (input, mut driver) = make_driver();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tx = input.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    tx.wheel(1.0);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    driver.tick();
    // 100 events * 0.0007 folded into the target on the first tick
    assert!((driver.scroll().target_offset - 0.07).abs() < 1e-5);
}

#[test]
fn sending_after_driver_is_gone_is_harmless() {
    let (input, driver) = make_driver();
    drop(driver);
    input.wheel(10.0);
    input.pointer_moved(1.0, 2.0);
    input.resized(3, 4);
}

#[test]
fn fps_is_zero_before_a_full_window() {
    let (_input, mut driver) = make_driver();
    driver.tick();
    assert_eq!(driver.stats().fps(), 0.0);
}
