use super::constants::*;
use super::tween::{keyframes_linear, lerp};
use rand::Rng;

/// A decorative background particle.
///
/// Positions are percentages of the viewport. `dx`/`dy` describe where one
/// loop ends relative to the start: `dx` sideways, `dy` upwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub duration: f32,
    pub delay: f32,
    pub color: &'static str,
    pub dx: f32,
    pub dy: f32,
}

/// Sampled particle state at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    /// Draw one particle's attributes from `rng`.
    pub fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.gen_range(0.0..PARTICLE_POS_MAX),
            y: rng.gen_range(0.0..PARTICLE_POS_MAX),
            size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            duration: rng.gen_range(PARTICLE_DURATION_MIN_SEC..PARTICLE_DURATION_MAX_SEC),
            delay: rng.gen_range(0.0..PARTICLE_DELAY_MAX_SEC),
            color: PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())],
            dx: rng.gen_range(-PARTICLE_DRIFT_X_HALF_SPAN..PARTICLE_DRIFT_X_HALF_SPAN),
            dy: rng.gen_range(0.0..PARTICLE_DRIFT_Y_MAX),
        }
    }

    /// Loop phase in \[0, 1) at `t_sec` since mount, or `None` while delayed.
    pub fn phase(&self, t_sec: f32) -> Option<f32> {
        let local = t_sec - self.delay;
        if local.is_nan() || local < 0.0 || self.duration <= 0.0 {
            return None;
        }
        Some(local.rem_euclid(self.duration) / self.duration)
    }

    /// Position and opacity at `t_sec` since mount.
    ///
    /// Motion is linear and restarts from the origin each loop; the opacity
    /// envelope is zero at both ends so the jump back is invisible.
    pub fn sample(&self, t_sec: f32) -> ParticleFrame {
        match self.phase(t_sec) {
            None => ParticleFrame {
                x: self.x,
                y: self.y,
                size: self.size,
                opacity: 0.0,
            },
            Some(p) => ParticleFrame {
                x: lerp(self.x, self.x + self.dx, p),
                y: lerp(self.y, self.y - self.dy, p),
                size: self.size,
                opacity: keyframes_linear(&PARTICLE_OPACITY_KEYFRAMES, p),
            },
        }
    }

    #[inline]
    pub fn glow_radius(&self) -> f32 {
        self.size * PARTICLE_GLOW_FACTOR
    }
}

/// Generate a full batch of `PARTICLE_COUNT` particles.
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|i| Particle::random(i, rng)).collect()
}

/// The ambient particle set, generated once per mount.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    mounted: bool,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the particle set. Only the first call after construction or
    /// [`reset`](Self::reset) has any effect; returns whether it generated.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.mounted {
            return false;
        }
        self.particles = generate_particles(rng);
        self.mounted = true;
        true
    }

    /// Forget the current set so the next mount generates a fresh one.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.mounted = false;
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.mounted
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Sample every particle at `t_sec` since mount.
    pub fn sample_all(&self, t_sec: f32) -> impl Iterator<Item = (&Particle, ParticleFrame)> + '_ {
        self.particles.iter().map(move |p| (p, p.sample(t_sec)))
    }
}
