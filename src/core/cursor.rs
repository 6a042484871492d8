use super::constants::*;
use super::tracker::PointerTracker;
use super::tween::{Spring, SpringScalar, SpringVec2};
use glam::Vec2;

/// One circular cursor layer ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorLayer {
    pub center: Vec2,
    pub radius: f32,
    pub scale: f32,
    pub opacity: f32,
    pub color: &'static str,
}

impl CursorLayer {
    #[inline]
    pub fn scaled_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

/// Everything the cursor painter needs for one frame.
///
/// Paint order back to front: glow, trail, ring, dot.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorFrame {
    pub visible: bool,
    pub interactive: bool,
    pub dot: CursorLayer,
    pub ring: CursorLayer,
    pub glow: CursorLayer,
    /// Trail dots by recency rank, newest first.
    pub trail: Vec<CursorLayer>,
}

/// Opacity of the trail entry at `rank` among `len` retained entries.
///
/// Linear in rank: the newest entry is brightest and the oldest approaches 0.
pub fn trail_opacity(rank: usize, len: usize, interactive: bool) -> f32 {
    if len == 0 || rank >= len {
        return 0.0;
    }
    let peak = if interactive {
        TRAIL_OPACITY_HOVER
    } else {
        TRAIL_OPACITY_IDLE
    };
    (1.0 - rank as f32 / len as f32) * peak
}

/// Per-layer springs that smooth the raw pointer into a lagging cursor.
///
/// The dot is the snappiest, then the ring, then the outer glow, which gives
/// the layered lag. Scales also spring so hover transitions are not abrupt.
#[derive(Clone, Debug)]
pub struct CursorAnimator {
    dot: SpringVec2,
    ring: SpringVec2,
    glow: SpringVec2,
    trail: [SpringVec2; TRAIL_CAPACITY],
    dot_scale: SpringScalar,
    ring_scale: SpringScalar,
    glow_scale: SpringScalar,
    trail_scale: SpringScalar,
    primed: bool,
}

impl Default for CursorAnimator {
    fn default() -> Self {
        Self {
            dot: SpringVec2::default(),
            ring: SpringVec2::default(),
            glow: SpringVec2::default(),
            trail: [SpringVec2::default(); TRAIL_CAPACITY],
            dot_scale: SpringScalar::at(1.0),
            ring_scale: SpringScalar::at(1.0),
            glow_scale: SpringScalar::at(1.0),
            trail_scale: SpringScalar::at(1.0),
            primed: false,
        }
    }
}

impl CursorAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump every layer to `pos` with zero velocity.
    pub fn snap_to(&mut self, pos: Vec2) {
        self.dot.snap(pos);
        self.ring.snap(pos);
        self.glow.snap(pos);
        for s in &mut self.trail {
            s.snap(pos);
        }
    }

    /// Step the springs by `dt_sec` and build the frame for `tracker`.
    pub fn advance(&mut self, tracker: &PointerTracker, dt_sec: f32) -> CursorFrame {
        let target = tracker.current().to_vec2();
        let visible = tracker.is_visible();
        let interactive = tracker.is_interactive();

        // First sample, or coming back into the document: start at the pointer.
        if !visible || tracker.trail().is_empty() {
            self.primed = false;
        } else if !self.primed && target.is_finite() {
            self.snap_to(target);
            self.primed = true;
        }

        let (hover, trail_hover, glow_hover) = if interactive {
            (HOVER_SCALE, TRAIL_HOVER_SCALE, GLOW_HOVER_SCALE)
        } else {
            (1.0, 1.0, 1.0)
        };
        let scale_spring = Spring::from_pair(SCALE_SPRING);
        self.dot_scale.step(hover, scale_spring, dt_sec);
        self.ring_scale.step(hover, scale_spring, dt_sec);
        self.glow_scale.step(glow_hover, scale_spring, dt_sec);
        self.trail_scale.step(trail_hover, scale_spring, dt_sec);

        self.dot.step(target, Spring::from_pair(DOT_SPRING), dt_sec);
        self.ring.step(target, Spring::from_pair(RING_SPRING), dt_sec);
        self.glow.step(target, Spring::from_pair(GLOW_SPRING), dt_sec);

        let history = tracker.trail();
        let len = history.len();
        let trail_spring = Spring::from_pair(TRAIL_SPRING);
        let trail_color = if interactive { NEON_MAGENTA } else { NEON_PURPLE };
        let mut trail = Vec::with_capacity(len);
        for (rank, sample) in history.iter().enumerate() {
            let spring = &mut self.trail[rank];
            spring.step(sample.to_vec2(), trail_spring, dt_sec);
            trail.push(CursorLayer {
                center: spring.position,
                radius: TRAIL_RADIUS,
                scale: self.trail_scale.value,
                opacity: trail_opacity(rank, len, interactive),
                color: trail_color,
            });
        }

        CursorFrame {
            visible,
            interactive,
            dot: CursorLayer {
                center: self.dot.position,
                radius: DOT_RADIUS,
                scale: self.dot_scale.value,
                opacity: 1.0,
                color: if interactive { NEON_MAGENTA } else { NEON_CYAN },
            },
            ring: CursorLayer {
                center: self.ring.position,
                radius: RING_RADIUS,
                scale: self.ring_scale.value,
                opacity: 1.0,
                color: if interactive {
                    RING_HOVER_COLOR
                } else {
                    RING_IDLE_COLOR
                },
            },
            glow: CursorLayer {
                center: self.glow.position,
                radius: GLOW_RADIUS,
                scale: self.glow_scale.value,
                opacity: if interactive {
                    GLOW_OPACITY_HOVER
                } else {
                    GLOW_OPACITY_IDLE
                },
                color: NEON_CYAN,
            },
            trail,
        }
    }
}
