use super::constants::TRAIL_CAPACITY;
use glam::Vec2;
use smallvec::SmallVec;

/// Instantaneous pointer position in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Bounded history of recent pointer samples, newest first.
///
/// Pushing prepends; once `TRAIL_CAPACITY` entries are held the oldest one is
/// evicted. Storage is inline, so the buffer never allocates.
#[derive(Clone, Debug, Default)]
pub struct TrailHistory {
    samples: SmallVec<[PointerSample; TRAIL_CAPACITY]>,
}

impl TrailHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `sample`, dropping the oldest entry when over capacity.
    pub fn push(&mut self, sample: PointerSample) {
        if self.samples.len() == TRAIL_CAPACITY {
            self.samples.pop();
        }
        self.samples.insert(0, sample);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        TRAIL_CAPACITY
    }

    /// Most recently recorded sample.
    #[inline]
    pub fn newest(&self) -> Option<PointerSample> {
        self.samples.first().copied()
    }

    #[inline]
    pub fn oldest(&self) -> Option<PointerSample> {
        self.samples.last().copied()
    }

    #[inline]
    pub fn get(&self, rank: usize) -> Option<PointerSample> {
        self.samples.get(rank).copied()
    }

    pub fn as_slice(&self) -> &[PointerSample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointerSample> + '_ {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
