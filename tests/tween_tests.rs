// Host-side tests for the spring/keyframe tween helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}

use constants::*;
use glam::Vec2;
use tween::*;

fn run(spring: Spring, target: Vec2, seconds: f32) -> SpringVec2 {
    let mut s = SpringVec2::at(Vec2::ZERO);
    let dt = 1.0 / 60.0;
    let steps = (seconds / dt).round() as usize;
    for _ in 0..steps {
        s.step(target, spring, dt);
    }
    s
}

#[test]
fn springs_settle_on_target() {
    let target = Vec2::new(120.0, -40.0);
    for pair in [DOT_SPRING, RING_SPRING, GLOW_SPRING, TRAIL_SPRING] {
        let s = run(Spring::from_pair(pair), target, 6.0);
        assert!(
            s.settled(target),
            "spring {pair:?} ended at {:?} v={:?}",
            s.position,
            s.velocity
        );
    }
}

#[test]
fn stiffer_layers_lead_after_first_frame() {
    let target = Vec2::new(100.0, 0.0);
    let dot = run(Spring::from_pair(DOT_SPRING), target, 1.0 / 60.0);
    let ring = run(Spring::from_pair(RING_SPRING), target, 1.0 / 60.0);
    let glow = run(Spring::from_pair(GLOW_SPRING), target, 1.0 / 60.0);
    assert!(dot.position.x > ring.position.x);
    assert!(ring.position.x > glow.position.x);
    assert!(glow.position.x > 0.0);
}

#[test]
fn large_step_stays_stable() {
    // one huge dt is split into small sub-steps instead of exploding
    let mut s = SpringVec2::at(Vec2::ZERO);
    let target = Vec2::new(50.0, 50.0);
    s.step(target, Spring::from_pair(DOT_SPRING), 5.0);
    assert!(s.position.is_finite());
    assert!(s.position.distance(target) < 0.5, "got {:?}", s.position);
}

#[test]
fn non_positive_or_nan_dt_is_a_no_op() {
    let mut s = SpringVec2::at(Vec2::new(1.0, 2.0));
    let before = s;
    s.step(Vec2::new(9.0, 9.0), Spring::new(100.0, 10.0), 0.0);
    s.step(Vec2::new(9.0, 9.0), Spring::new(100.0, 10.0), -1.0);
    s.step(Vec2::new(9.0, 9.0), Spring::new(100.0, 10.0), f32::NAN);
    assert_eq!(s, before);
}

#[test]
fn snap_zeroes_velocity() {
    let mut s = run(Spring::new(300.0, 5.0), Vec2::new(10.0, 0.0), 0.1);
    assert!(s.velocity.length() > 0.0);
    s.snap(Vec2::new(3.0, 4.0));
    assert_eq!(s.position, Vec2::new(3.0, 4.0));
    assert_eq!(s.velocity, Vec2::ZERO);
    assert!(s.settled(Vec2::new(3.0, 4.0)));
}

#[test]
fn scalar_spring_reaches_hover_scale() {
    let mut scale = SpringScalar::at(1.0);
    for _ in 0..120 {
        scale.step(HOVER_SCALE, Spring::from_pair(SCALE_SPRING), 1.0 / 60.0);
    }
    assert!((scale.value - HOVER_SCALE).abs() < 0.01, "scale={}", scale.value);
}

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn keyframes_sample_linearly() {
    let frames = PARTICLE_OPACITY_KEYFRAMES;
    assert_eq!(keyframes_linear(&frames, 0.0), 0.0);
    assert!((keyframes_linear(&frames, 0.25) - 0.4).abs() < 1e-6);
    assert!((keyframes_linear(&frames, 0.5) - 0.8).abs() < 1e-6);
    assert!((keyframes_linear(&frames, 0.75) - 0.4).abs() < 1e-6);
    assert!(keyframes_linear(&frames, 1.0).abs() < 1e-6);
}

#[test]
fn keyframes_clamp_and_degenerate_inputs() {
    assert_eq!(keyframes_linear(&[], 0.3), 0.0);
    assert_eq!(keyframes_linear(&[0.7], 0.9), 0.7);
    assert_eq!(keyframes_linear(&[1.0, 3.0], -2.0), 1.0);
    assert_eq!(keyframes_linear(&[1.0, 3.0], 7.0), 3.0);
    assert_eq!(keyframes_linear(&[1.0, 3.0], f32::NAN), 1.0);
}

#[test]
fn non_finite_target_is_ignored() {
    let mut s = SpringVec2::at(Vec2::new(1.0, 2.0));
    let before = s;
    s.step(Vec2::new(f32::NAN, 5.0), Spring::from_pair(DOT_SPRING), 1.0 / 60.0);
    s.step(Vec2::new(0.0, f32::INFINITY), Spring::from_pair(DOT_SPRING), 1.0 / 60.0);
    assert_eq!(s, before);

    let mut scale = SpringScalar::at(1.0);
    scale.step(f32::NAN, Spring::from_pair(SCALE_SPRING), 1.0 / 60.0);
    assert_eq!(scale.value, 1.0);
}

#[test]
fn non_finite_state_resets_onto_target() {
    let mut s = SpringVec2 {
        position: Vec2::new(f32::NAN, 0.0),
        velocity: Vec2::new(0.0, f32::INFINITY),
    };
    let target = Vec2::new(7.0, 8.0);
    s.step(target, Spring::from_pair(RING_SPRING), 1.0 / 60.0);
    assert_eq!(s.position, target);
    assert_eq!(s.velocity, Vec2::ZERO);

    let mut scale = SpringScalar {
        value: f32::NAN,
        velocity: 0.0,
    };
    scale.step(HOVER_SCALE, Spring::from_pair(SCALE_SPRING), 1.0 / 60.0);
    assert_eq!(scale.value, HOVER_SCALE);
    assert_eq!(scale.velocity, 0.0);
}
