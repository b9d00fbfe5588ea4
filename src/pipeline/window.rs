//! Bounded FIFO sample window
//!
//! Accumulates per-frame pose samples until it holds exactly one classifier
//! input. At capacity each push evicts the oldest sample, so the window
//! slides forward one frame at a time.

use std::collections::VecDeque;

use crate::pose::Sample;

/// Fixed-capacity FIFO of pose samples.
///
/// Invariant: `len() <= capacity()` at all times. Owned exclusively by one
/// recognizer instance and mutated only through these operations.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create an empty window with the given capacity
    ///
    /// # Panics
    /// Panics if capacity is zero; callers validate via [`RecognizerConfig`]
    /// before construction.
    ///
    /// [`RecognizerConfig`]: crate::RecognizerConfig
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be > 0");
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest if the window is at capacity
    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Whether the window holds exactly `capacity` samples
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all samples immediately
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Iterate samples oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Copy the current contents into one flat buffer, oldest frame first.
    ///
    /// This is the snapshot handed to inference; the window may keep sliding
    /// afterwards without affecting it.
    pub fn to_flat(&self) -> Vec<f32> {
        let per_frame = self.samples.front().map(Vec::len).unwrap_or(0);
        let mut flat = Vec::with_capacity(self.samples.len() * per_frame);
        for sample in &self.samples {
            flat.extend_from_slice(sample);
        }
        flat
    }
}
