//! Majority-vote label smoothing
//!
//! Raw per-inference labels are noisy; a short bounded history of accepted
//! labels is resolved by frequency into one stable label.

use std::collections::VecDeque;

/// Bounded FIFO of accepted prediction labels with majority-vote resolution.
///
/// Invariant: `len() <= capacity`. Tie-break rule: among labels with equal
/// counts, the one whose first occurrence is earliest in the current history
/// contents wins. Counting walks the history in insertion order and a later
/// label replaces the leader only with a strictly greater count, which makes
/// resolution deterministic for any history contents.
#[derive(Debug, Clone)]
pub struct VoteHistory {
    labels: VecDeque<String>,
    capacity: usize,
}

impl VoteHistory {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "vote history capacity must be > 0");
        Self {
            labels: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an accepted label, evicting the oldest beyond capacity
    pub fn push(&mut self, label: String) {
        if self.labels.len() == self.capacity {
            self.labels.pop_front();
        }
        self.labels.push_back(label);
    }

    /// Resolve the most frequent label, or None if the history is empty.
    pub fn resolve(&self) -> Option<&str> {
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for label in &self.labels {
            if let Some(entry) = counts.iter_mut().find(|entry| entry.0 == label.as_str()) {
                entry.1 += 1;
            } else {
                counts.push((label.as_str(), 1));
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (label, count) in counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }

        best.map(|(label, _)| label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(labels: &[&str], capacity: usize) -> VoteHistory {
        let mut history = VoteHistory::new(capacity);
        for label in labels {
            history.push((*label).to_string());
        }
        history
    }

    #[test]
    fn test_empty_history_resolves_none() {
        let history = VoteHistory::new(5);
        assert_eq!(history.resolve(), None);
    }

    #[test]
    fn test_majority_wins() {
        let history = history_of(&["A", "B", "A", "A", "B"], 10);
        assert_eq!(history.resolve(), Some("A"));
    }

    #[test]
    fn test_capacity_evicts_oldest_votes() {
        let mut history = history_of(&["A", "A", "A"], 3);
        history.push("B".to_string());
        history.push("B".to_string());

        // History is now [A, B, B]
        assert_eq!(history.len(), 3);
        assert_eq!(history.resolve(), Some("B"));
    }

    #[test]
    fn test_tie_breaks_to_first_seen() {
        // B and A both appear twice; B occurs first in the history
        let history = history_of(&["B", "A", "A", "B"], 10);
        assert_eq!(history.resolve(), Some("B"));

        // Same counts, opposite first occurrence
        let history = history_of(&["A", "B", "B", "A"], 10);
        assert_eq!(history.resolve(), Some("A"));
    }

    #[test]
    fn test_tie_break_follows_eviction() {
        // Capacity 4: pushing C evicts the leading B, so A becomes first-seen
        let mut history = history_of(&["B", "A", "A", "B"], 4);
        history.push("C".to_string());

        // History is now [A, A, B, C]
        assert_eq!(history.resolve(), Some("A"));
    }

    #[test]
    fn test_single_entry() {
        let history = history_of(&["OI"], 15);
        assert_eq!(history.resolve(), Some("OI"));
    }

    #[test]
    fn test_clear() {
        let mut history = history_of(&["A", "B"], 5);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.resolve(), None);
    }
}
