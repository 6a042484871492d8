// Host-side tests for the effect controller's lifecycle and end-to-end input flow.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod trail {
    include!("../src/core/trail.rs");
}
mod tracker {
    include!("../src/core/tracker.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod cursor {
    include!("../src/core/cursor.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod contact {
    include!("../src/core/contact.rs");
}
mod nav {
    include!("../src/core/nav.rs");
}
mod controller {
    include!("../src/core/controller.rs");
}

use constants::PARTICLE_COUNT;
use controller::FxController;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracker::InteractiveTarget;
use trail::PointerSample;

struct El {
    tag: &'static str,
    class: Option<&'static str>,
}

impl InteractiveTarget for El {
    fn tag_name(&self) -> String {
        self.tag.to_string()
    }

    fn has_class(&self, class: &str) -> bool {
        self.class == Some(class)
    }
}

fn mounted(seed: u64, with_scene: bool) -> FxController {
    let mut ctl = FxController::new();
    assert!(ctl.mount(&mut StdRng::seed_from_u64(seed), with_scene));
    ctl
}

#[test]
fn mount_generates_particles_once() {
    let mut ctl = mounted(1, false);
    assert!(ctl.is_mounted());
    assert_eq!(ctl.particles().len(), PARTICLE_COUNT);
    let first = ctl.particles().to_vec();

    // re-running the mount path is a no-op
    assert!(!ctl.mount(&mut StdRng::seed_from_u64(99), true));
    assert_eq!(ctl.particles(), first.as_slice());
    assert!(ctl.scene().is_none());
}

#[test]
fn rendering_twice_keeps_particle_set() {
    let mut ctl = mounted(2, true);
    let first = ctl.particles().to_vec();
    ctl.advance(1.0 / 60.0);
    let a: Vec<_> = ctl.particle_frames().map(|(_, f)| f).collect();
    let b: Vec<_> = ctl.particle_frames().map(|(_, f)| f).collect();
    assert_eq!(a, b);
    ctl.advance(1.0 / 60.0);
    assert_eq!(ctl.particles(), first.as_slice());
}

#[test]
fn remount_after_unmount_regenerates() {
    let mut ctl = mounted(3, true);
    let first = ctl.particles().to_vec();
    ctl.on_pointer_move(PointerSample::new(5.0, 5.0));
    ctl.advance(0.5);

    ctl.unmount();
    assert!(!ctl.is_mounted());
    assert!(ctl.particles().is_empty());
    assert!(ctl.scene().is_none());
    assert!(ctl.tracker().trail().is_empty());
    assert_eq!(ctl.clock_sec(), 0.0);

    assert!(ctl.mount(&mut StdRng::seed_from_u64(4), true));
    assert_eq!(ctl.particles().len(), PARTICLE_COUNT);
    assert_ne!(ctl.particles(), first.as_slice());
    assert!(ctl.scene().is_some());
}

#[test]
fn same_seed_reproduces_particles() {
    let a = mounted(77, false);
    let b = mounted(77, false);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn clock_advances_with_valid_dt_only() {
    let mut ctl = mounted(5, true);
    ctl.advance(0.25);
    ctl.advance(0.25);
    ctl.advance(-1.0);
    ctl.advance(f32::NAN);
    assert!((ctl.clock_sec() - 0.5).abs() < 1e-6);
    let scene = ctl.scene().expect("scene");
    assert!((scene.elapsed - 0.5).abs() < 1e-6);
}

#[test]
fn pointer_flow_end_to_end() {
    let mut ctl = mounted(6, false);
    for v in [10.0, 20.0, 30.0, 40.0] {
        ctl.on_pointer_move(PointerSample::new(v, v));
    }
    let xs: Vec<f32> = ctl.tracker().trail().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![40.0, 30.0, 20.0, 10.0]);

    ctl.on_pointer_enter_element(&El {
        tag: "BUTTON",
        class: None,
    });
    let frame = ctl.advance(1.0 / 60.0);
    assert!(frame.interactive);
    assert_eq!(frame.trail.len(), 4);

    ctl.on_pointer_leave_element();
    assert!(!ctl.advance(1.0 / 60.0).interactive);

    ctl.on_pointer_enter_element(&El {
        tag: "DIV",
        class: Some("card-glow"),
    });
    assert!(ctl.tracker().is_interactive());
}

#[test]
fn visibility_gates_cursor_frame() {
    let mut ctl = mounted(7, false);
    ctl.on_pointer_move(PointerSample::new(1.0, 1.0));
    ctl.on_visibility_leave();
    assert!(!ctl.advance(0.016).visible);
    ctl.on_visibility_enter();
    assert!(ctl.advance(0.016).visible);
}

#[test]
fn unmount_closes_menu_but_keeps_form() {
    let mut ctl = mounted(8, false);
    ctl.nav.toggle();
    ctl.contact.set_field("email", "x@y.z");
    ctl.unmount();
    assert!(!ctl.nav.is_open());
    assert_eq!(ctl.contact.email, "x@y.z");
}
