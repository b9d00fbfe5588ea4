//! Practice-mode scoring
//!
//! Compares recognized gestures against a caller-supplied target, the way a
//! quiz or lesson flow does. This is a policy layer over the recognizer's
//! event stream; the core state machine knows nothing about targets.

use crate::pipeline::FrameOutcome;

/// Result of scoring one recognized gesture against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeOutcome {
    /// The recognized gesture matches the target
    Hit,
    /// A gesture was recognized, but not the target
    Miss,
}

/// Scores recognized events against a target gesture.
#[derive(Debug, Clone)]
pub struct PracticeFilter {
    target: String,
    attempts: u32,
    hits: u32,
}

impl PracticeFilter {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            attempts: 0,
            hits: 0,
        }
    }

    /// Score one per-frame outcome. Only recognized events count as
    /// attempts; `NoEvent` and inference failures pass through unscored.
    /// Labels compare case-insensitively, matching how lesson targets are
    /// written.
    pub fn observe(&mut self, outcome: &FrameOutcome) -> Option<PracticeOutcome> {
        let label = match outcome {
            FrameOutcome::Recognized { label, .. } => label,
            _ => return None,
        };

        self.attempts += 1;
        if label.eq_ignore_ascii_case(&self.target) {
            self.hits += 1;
            Some(PracticeOutcome::Hit)
        } else {
            Some(PracticeOutcome::Miss)
        }
    }

    /// Advance to the next target (e.g. the next letter in a lesson)
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognized(label: &str) -> FrameOutcome {
        FrameOutcome::Recognized {
            label: label.to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_hit_and_miss() {
        let mut filter = PracticeFilter::new("A");

        assert_eq!(filter.observe(&recognized("A")), Some(PracticeOutcome::Hit));
        assert_eq!(filter.observe(&recognized("B")), Some(PracticeOutcome::Miss));
        assert_eq!(filter.attempts(), 2);
        assert_eq!(filter.hits(), 1);
    }

    #[test]
    fn test_non_events_are_not_scored() {
        let mut filter = PracticeFilter::new("A");

        assert_eq!(filter.observe(&FrameOutcome::NoEvent), None);
        assert_eq!(
            filter.observe(&FrameOutcome::InferenceFailed {
                reason: "oops".to_string()
            }),
            None
        );
        assert_eq!(filter.attempts(), 0);
    }

    #[test]
    fn test_case_insensitive_match() {
        let mut filter = PracticeFilter::new("oi");
        assert_eq!(filter.observe(&recognized("OI")), Some(PracticeOutcome::Hit));
    }

    #[test]
    fn test_target_advances() {
        let mut filter = PracticeFilter::new("A");
        filter.observe(&recognized("A"));

        filter.set_target("B");
        assert_eq!(filter.observe(&recognized("A")), Some(PracticeOutcome::Miss));
        assert_eq!(filter.observe(&recognized("B")), Some(PracticeOutcome::Hit));
        assert_eq!(filter.hits(), 2);
        assert_eq!(filter.attempts(), 3);
    }
}
