//! Monotonic "fire once per element" bookkeeping used by the scroll reveal and
//! the lazy image loader.

use fnv::FnvHashSet;

// Browsers report ratios just under a crossed threshold (0.0999..).
const RATIO_EPSILON: f64 = 1e-3;

/// Visibility sample delivered by a viewport-intersection notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Set of element keys that have already fired.
#[derive(Debug, Default, Clone)]
pub struct OneShotSet {
    fired: FnvHashSet<usize>,
}

impl OneShotSet {
    /// Returns `true` exactly once per key.
    pub fn fire(&mut self, key: usize) -> bool {
        self.fired.insert(key)
    }

    pub fn has_fired(&self, key: usize) -> bool {
        self.fired.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

/// Scroll-reveal decisions. Once revealed an element never reverts, whatever
/// later samples say.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    revealed: OneShotSet,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: OneShotSet::default(),
        }
    }

    /// `true` when the element at `key` must be marked revealed now.
    pub fn observe(&mut self, key: usize, sample: IntersectionSample) -> bool {
        if !sample.is_intersecting || sample.ratio + RATIO_EPSILON < self.threshold {
            return false;
        }
        self.revealed.fire(key)
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.revealed.has_fired(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// What to do with a lazily loaded image on its first intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadImage {
    pub src: String,
}

#[derive(Debug, Default, Clone)]
pub struct LazyLoader {
    loaded: OneShotSet,
}

impl LazyLoader {
    /// Decide whether the image at `key` should swap in `deferred_src`.
    /// An image without a deferred source is skipped and can still be picked up
    /// later if the attribute appears.
    pub fn on_intersection(
        &mut self,
        key: usize,
        is_intersecting: bool,
        deferred_src: Option<&str>,
    ) -> Option<LoadImage> {
        if !is_intersecting || self.loaded.has_fired(key) {
            return None;
        }
        let src = deferred_src?;
        self.loaded.fire(key);
        Some(LoadImage {
            src: src.to_string(),
        })
    }

    pub fn is_loaded(&self, key: usize) -> bool {
        self.loaded.has_fired(key)
    }
}
