// Host-side tests for ambient particle generation and sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn in_range(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo && v < hi
}

#[test]
fn generates_fixed_count_with_bounded_attributes() {
    for seed in 0..50u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = generate_particles(&mut rng);
        assert_eq!(batch.len(), PARTICLE_COUNT);
        for (i, p) in batch.iter().enumerate() {
            assert_eq!(p.id, i);
            assert!(in_range(p.x, 0.0, 100.0), "x={}", p.x);
            assert!(in_range(p.y, 0.0, 100.0), "y={}", p.y);
            assert!(in_range(p.size, 1.0, 4.0), "size={}", p.size);
            assert!(in_range(p.duration, 30.0, 50.0), "duration={}", p.duration);
            assert!(in_range(p.delay, 0.0, 5.0), "delay={}", p.delay);
            assert!(PARTICLE_PALETTE.contains(&p.color), "color={}", p.color);
            assert!(in_range(p.dx, -25.0, 25.0), "dx={}", p.dx);
            assert!(in_range(p.dy, 0.0, 100.0), "dy={}", p.dy);
        }
    }
}

#[test]
fn palette_is_fully_used_over_many_draws() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = [false; 3];
    for _ in 0..20 {
        for p in generate_particles(&mut rng) {
            let idx = PARTICLE_PALETTE
                .iter()
                .position(|c| *c == p.color)
                .expect("palette color");
            seen[idx] = true;
        }
    }
    assert_eq!(seen, [true; 3]);
}

#[test]
fn field_initializes_once() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::new();
    assert!(!field.is_initialized());
    assert!(field.is_empty());

    assert!(field.initialize(&mut rng));
    let first = field.particles().to_vec();
    assert_eq!(first.len(), PARTICLE_COUNT);

    assert!(!field.initialize(&mut rng));
    assert!(!field.initialize(&mut rng));
    assert_eq!(field.particles(), first.as_slice());
}

#[test]
fn reset_allows_a_fresh_batch() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::new();
    field.initialize(&mut rng);
    let first = field.particles().to_vec();

    field.reset();
    assert!(!field.is_initialized());
    assert_eq!(field.len(), 0);

    assert!(field.initialize(&mut rng));
    assert_eq!(field.len(), PARTICLE_COUNT);
    assert_ne!(field.particles(), first.as_slice());
}

fn fixed_particle() -> Particle {
    Particle {
        id: 0,
        x: 40.0,
        y: 60.0,
        size: 2.0,
        duration: 40.0,
        delay: 2.0,
        color: NEON_CYAN,
        dx: -10.0,
        dy: 30.0,
    }
}

#[test]
fn particle_rests_invisible_during_delay() {
    let p = fixed_particle();
    assert_eq!(p.phase(0.0), None);
    let f = p.sample(1.5);
    assert_eq!((f.x, f.y, f.opacity), (40.0, 60.0, 0.0));
}

#[test]
fn particle_peaks_mid_loop() {
    let p = fixed_particle();
    let f = p.sample(22.0);
    assert!((f.opacity - 0.8).abs() < 1e-5);
    assert!((f.x - 35.0).abs() < 1e-4);
    assert!((f.y - 45.0).abs() < 1e-4);
    assert_eq!(f.size, 2.0);
}

#[test]
fn particle_loop_wraps_seamlessly() {
    let p = fixed_particle();
    let end = p.sample(2.0 + 40.0 - 1e-3);
    assert!(end.opacity < 1e-3);
    assert!((end.x - 30.0).abs() < 0.01);
    assert!((end.y - 30.0).abs() < 0.01);

    let restart = p.sample(42.0);
    assert!(restart.opacity.abs() < 1e-6);
    assert!((restart.x - 40.0).abs() < 1e-4);
    assert!((restart.y - 60.0).abs() < 1e-4);

    // later loops repeat the first one
    let a = p.sample(12.0);
    let b = p.sample(12.0 + 3.0 * 40.0);
    assert!((a.opacity - b.opacity).abs() < 1e-4);
    assert!((a.x - b.x).abs() < 1e-3);
}

#[test]
fn sampling_does_not_mutate_field() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = ParticleField::new();
    field.initialize(&mut rng);
    let before = field.particles().to_vec();
    let a: Vec<ParticleFrame> = field.sample_all(10.0).map(|(_, f)| f).collect();
    let b: Vec<ParticleFrame> = field.sample_all(10.0).map(|(_, f)| f).collect();
    assert_eq!(a, b);
    assert_eq!(field.particles(), before.as_slice());
    for f in &a {
        assert!((0.0..=0.8 + 1e-6).contains(&f.opacity));
    }
}

#[test]
fn glow_radius_is_twice_size() {
    assert_eq!(fixed_particle().glow_radius(), 4.0);
}
