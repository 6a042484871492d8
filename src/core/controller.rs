use super::contact::ContactForm;
use super::cursor::{CursorAnimator, CursorFrame};
use super::nav::NavMenu;
use super::particles::{Particle, ParticleField, ParticleFrame};
use super::scene::BackgroundScene;
use super::tracker::{InteractiveTarget, PointerTracker};
use super::trail::PointerSample;
use rand::Rng;

/// Owner of all page-effect state.
///
/// Listeners and the frame loop share one controller; nothing lives in
/// globals. The particle set (and the backdrop) are generated in
/// [`mount`](Self::mount) and never on a per-frame path.
#[derive(Debug, Default)]
pub struct FxController {
    tracker: PointerTracker,
    cursor: CursorAnimator,
    particles: ParticleField,
    scene: Option<BackgroundScene>,
    pub contact: ContactForm,
    pub nav: NavMenu,
    clock_sec: f32,
}

impl FxController {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time setup for a mount. Returns `false` if already mounted, in
    /// which case nothing is regenerated.
    pub fn mount<R: Rng + ?Sized>(&mut self, rng: &mut R, with_scene: bool) -> bool {
        if !self.particles.initialize(rng) {
            return false;
        }
        if with_scene {
            self.scene = Some(BackgroundScene::new(rng));
        }
        self.clock_sec = 0.0;
        true
    }

    /// Drop all per-mount state.
    pub fn unmount(&mut self) {
        self.particles.reset();
        self.scene = None;
        self.tracker = PointerTracker::new();
        self.cursor = CursorAnimator::new();
        self.nav.close();
        self.clock_sec = 0.0;
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.particles.is_initialized()
    }

    // ---------------- pointer input ----------------
    pub fn on_pointer_move(&mut self, sample: PointerSample) {
        self.tracker.on_pointer_move(sample);
    }

    pub fn on_pointer_enter_element(&mut self, target: &dyn InteractiveTarget) {
        self.tracker.on_pointer_enter_element(target);
    }

    pub fn on_pointer_leave_element(&mut self) {
        self.tracker.on_pointer_leave_element();
    }

    pub fn on_visibility_leave(&mut self) {
        self.tracker.on_visibility_leave();
    }

    pub fn on_visibility_enter(&mut self) {
        self.tracker.on_visibility_enter();
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    // ---------------- animation ----------------
    /// Advance every animated layer by `dt_sec` and return the cursor frame.
    pub fn advance(&mut self, dt_sec: f32) -> CursorFrame {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.clock_sec += dt_sec;
        }
        if let Some(scene) = self.scene.as_mut() {
            scene.advance(dt_sec);
        }
        self.cursor.advance(&self.tracker, dt_sec)
    }

    /// Seconds since mount, as seen by the particle loops.
    #[inline]
    pub fn clock_sec(&self) -> f32 {
        self.clock_sec
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    pub fn particle_frames(&self) -> impl Iterator<Item = (&Particle, ParticleFrame)> + '_ {
        self.particles.sample_all(self.clock_sec)
    }

    pub fn scene(&self) -> Option<&BackgroundScene> {
        self.scene.as_ref()
    }
}
