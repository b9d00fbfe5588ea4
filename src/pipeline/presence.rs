//! Consecutive-absence tracking
//!
//! Counts frames in which the detector reported no hands. A long enough gap
//! means the signer stepped away or finished a gesture, so the recognizer
//! discards stale window and vote contents instead of letting them bleed
//! into the next gesture.

/// Tracks consecutive hand-absent frames.
///
/// The counter resets to zero on any frame with at least one detected hand
/// and is never capped while hands stay absent.
#[derive(Debug, Clone)]
pub struct PresenceTracker {
    absent_frames: u32,
    reset_threshold: u32,
}

impl PresenceTracker {
    pub fn new(reset_threshold: u32) -> Self {
        Self {
            absent_frames: 0,
            reset_threshold,
        }
    }

    /// Record a frame with at least one detected hand
    pub fn mark_present(&mut self) {
        self.absent_frames = 0;
    }

    /// Record a hand-absent frame.
    ///
    /// Returns true once the gap exceeds the reset threshold; the caller
    /// combines this with a non-empty-window check so repeated absent frames
    /// do not trigger redundant clears.
    pub fn mark_absent(&mut self) -> bool {
        self.absent_frames += 1;
        self.absent_frames > self.reset_threshold
    }

    /// Current consecutive-absent count
    pub fn absent_frames(&self) -> u32 {
        self.absent_frames
    }

    /// Reset the counter (session-level reset)
    pub fn reset(&mut self) {
        self.absent_frames = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_resets_counter() {
        let mut tracker = PresenceTracker::new(3);
        tracker.mark_absent();
        tracker.mark_absent();
        assert_eq!(tracker.absent_frames(), 2);

        tracker.mark_present();
        assert_eq!(tracker.absent_frames(), 0);
    }

    #[test]
    fn test_threshold_is_strictly_exceeded() {
        let mut tracker = PresenceTracker::new(2);
        assert!(!tracker.mark_absent()); // 1
        assert!(!tracker.mark_absent()); // 2, not yet above threshold
        assert!(tracker.mark_absent()); // 3 > 2
    }

    #[test]
    fn test_counter_keeps_incrementing_past_threshold() {
        let mut tracker = PresenceTracker::new(1);
        for _ in 0..10 {
            tracker.mark_absent();
        }
        assert_eq!(tracker.absent_frames(), 10);
        assert!(tracker.mark_absent());
    }

    #[test]
    fn test_zero_threshold_trips_on_first_absence() {
        let mut tracker = PresenceTracker::new(0);
        assert!(tracker.mark_absent());
    }
}
