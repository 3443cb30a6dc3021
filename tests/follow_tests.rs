// Host-side tests for the pointer-follow integrator.

use drift_core::{FollowerState, MotionConfig};
use glam::Vec3;

#[test]
fn one_tick_toward_target_scenario() {
    let cfg = MotionConfig::default();
    let mut f = FollowerState::default();
    f.step(Vec3::new(5.0, 5.0, 0.0), &cfg);
    // 5 * 0.01 = 0.05, decayed by 0.95
    assert!((f.velocity - Vec3::new(0.0475, 0.0475, 0.0)).length() < 1e-6);
    assert!((f.position - Vec3::new(0.0475, 0.0475, 0.0)).length() < 1e-6);
}

#[test]
fn z_is_never_pulled() {
    let cfg = MotionConfig::default();
    let mut f = FollowerState::default();
    for _ in 0..500 {
        f.step(Vec3::new(-2.0, 1.0, 9.0), &cfg);
    }
    assert_eq!(f.position.z, 0.0);
    assert_eq!(f.velocity.z, 0.0);
}

#[test]
fn converges_to_fixed_target_for_any_gain() {
    let target = Vec3::new(3.0, -2.0, 0.0);
    for gain in [0.001_f32, 0.01, 0.1, 0.5, 0.99] {
        let cfg = MotionConfig {
            follow_gain: gain,
            follow_decay: 0.95,
            ..MotionConfig::default()
        };
        let mut f = FollowerState::default();
        let mut max_dist = 0.0_f32;
        for _ in 0..20_000 {
            f.step(target, &cfg);
            max_dist = max_dist.max(f.distance_xy(target));
        }
        assert!(
            f.distance_xy(target) < 1e-3,
            "gain {gain}: still {} away",
            f.distance_xy(target)
        );
        assert!(f.velocity.length() < 1e-3, "gain {gain}: still moving");
        // overshoot stays bounded
        assert!(max_dist < 10.0 * target.length(), "gain {gain} diverged");
    }
}

#[test]
fn default_gain_overshoots_then_settles() {
    let cfg = MotionConfig::default();
    let target = Vec3::new(1.0, 0.0, 0.0);
    let mut f = FollowerState::default();
    let mut peak = 0.0_f32;
    for _ in 0..3_000 {
        f.step(target, &cfg);
        peak = peak.max(f.position.x);
    }
    assert!(peak > 1.0, "expected floaty overshoot, peak {peak}");
    assert!((f.position.x - 1.0).abs() < 1e-3);
}

#[test]
fn at_rest_on_target_stays_put() {
    let cfg = MotionConfig::default();
    let target = Vec3::new(0.5, 0.25, 0.0);
    let mut f = FollowerState {
        position: target,
        velocity: Vec3::ZERO,
    };
    for _ in 0..10 {
        f.step(target, &cfg);
    }
    assert_eq!(f.position, target);
    assert_eq!(f.velocity, Vec3::ZERO);
}
