use super::constants::SPRING_MAX_SUBSTEP_SEC;
use glam::Vec2;

// Below these the spring counts as at rest
const REST_DISTANCE: f32 = 0.01;
const REST_SPEED: f32 = 0.01;

/// Damped spring with unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    pub const fn from_pair(pair: (f32, f32)) -> Self {
        Self::new(pair.0, pair.1)
    }

    #[inline]
    fn accel(&self, offset: f32, velocity: f32) -> f32 {
        -self.stiffness * offset - self.damping * velocity
    }
}

// Split `dt` into equal sub-steps no longer than SPRING_MAX_SUBSTEP_SEC.
#[inline]
fn substeps(dt_sec: f32) -> (u32, f32) {
    if !dt_sec.is_finite() || dt_sec <= 0.0 {
        return (0, 0.0);
    }
    let n = (dt_sec / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
    (n, dt_sec / n as f32)
}

/// A 2D position chasing its target through a [`Spring`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringVec2 {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl SpringVec2 {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Advance by `dt_sec` towards `target` (semi-implicit Euler).
    /// A non-finite `target` is ignored; a non-finite state resets onto `target`.
    pub fn step(&mut self, target: Vec2, spring: Spring, dt_sec: f32) {
        if !target.is_finite() {
            return;
        }
        if !self.position.is_finite() || !self.velocity.is_finite() {
            self.snap(target);
            return;
        }
        let (n, h) = substeps(dt_sec);
        for _ in 0..n {
            let offset = self.position - target;
            let ax = spring.accel(offset.x, self.velocity.x);
            let ay = spring.accel(offset.y, self.velocity.y);
            self.velocity += Vec2::new(ax, ay) * h;
            self.position += self.velocity * h;
        }
    }

    pub fn snap(&mut self, target: Vec2) {
        self.position = target;
        self.velocity = Vec2::ZERO;
    }

    pub fn settled(&self, target: Vec2) -> bool {
        self.position.distance(target) < REST_DISTANCE && self.velocity.length() < REST_SPEED
    }
}

/// Scalar counterpart of [`SpringVec2`], used for scale and opacity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringScalar {
    pub value: f32,
    pub velocity: f32,
}

impl SpringScalar {
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    pub fn step(&mut self, target: f32, spring: Spring, dt_sec: f32) {
        if !target.is_finite() {
            return;
        }
        if !self.value.is_finite() || !self.velocity.is_finite() {
            self.snap(target);
            return;
        }
        let (n, h) = substeps(dt_sec);
        for _ in 0..n {
            let a = spring.accel(self.value - target, self.velocity);
            self.velocity += a * h;
            self.value += self.velocity * h;
        }
    }

    pub fn snap(&mut self, target: f32) {
        self.value = target;
        self.velocity = 0.0;
    }

    pub fn settled(&self, target: f32) -> bool {
        (self.value - target).abs() < REST_DISTANCE && self.velocity.abs() < REST_SPEED
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sample evenly spaced keyframes at `phase` in \[0, 1\] with linear easing.
///
/// An empty slice yields 0 and a single frame is constant.
pub fn keyframes_linear(frames: &[f32], phase: f32) -> f32 {
    match frames.len() {
        0 => 0.0,
        1 => frames[0],
        n => {
            let p = if phase.is_finite() {
                phase.clamp(0.0, 1.0)
            } else {
                0.0
            };
            let scaled = p * (n - 1) as f32;
            let i = (scaled.floor() as usize).min(n - 2);
            lerp(frames[i], frames[i + 1], scaled - i as f32)
        }
    }
}
