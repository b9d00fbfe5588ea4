//! Frame-to-sample encoding
//!
//! Flattens one frame's detected hands into the fixed 126-value layout the
//! classifier was trained on: up to two hands in detection order, 21x3
//! values each, missing hand slots zero-filled.

use super::types::{Hand, FEATURE_DIM, HAND_SLOTS};

/// One frame's fixed-length pose vector
pub type Sample = Vec<f32>;

/// Encode one frame's detected hands into a [`Sample`].
///
/// Takes at most the first [`HAND_SLOTS`] hands in detection order and
/// concatenates their landmark coordinates; remaining slots stay zero.
/// Always succeeds; an empty detection yields an all-zero sample (the
/// presence tracker decides whether such a frame reaches the window at all).
pub fn encode_hands(hands: &[Hand]) -> Sample {
    let mut sample = vec![0.0f32; FEATURE_DIM];

    let mut offset = 0;
    for hand in hands.iter().take(HAND_SLOTS) {
        for landmark in hand.landmarks() {
            sample[offset] = landmark.x;
            sample[offset + 1] = landmark.y;
            sample[offset + 2] = landmark.z;
            offset += 3;
        }
    }

    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::types::{Landmark, LANDMARKS_PER_HAND};

    fn make_hand(value: f32) -> Hand {
        Hand::new([Landmark::new(value, value, value); LANDMARKS_PER_HAND])
    }

    #[test]
    fn test_no_hands_yields_zero_sample() {
        let sample = encode_hands(&[]);
        assert_eq!(sample.len(), FEATURE_DIM);
        assert!(sample.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_single_hand_pads_second_slot() {
        let sample = encode_hands(&[make_hand(0.5)]);
        assert_eq!(sample.len(), FEATURE_DIM);

        // First slot carries the hand, second slot stays zero
        assert!(sample[..FEATURE_DIM / 2].iter().all(|v| *v == 0.5));
        assert!(sample[FEATURE_DIM / 2..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_two_hands_fill_both_slots() {
        let sample = encode_hands(&[make_hand(0.25), make_hand(0.75)]);
        assert!(sample[..FEATURE_DIM / 2].iter().all(|v| *v == 0.25));
        assert!(sample[FEATURE_DIM / 2..].iter().all(|v| *v == 0.75));
    }

    #[test]
    fn test_extra_hands_are_ignored() {
        let sample = encode_hands(&[make_hand(0.1), make_hand(0.2), make_hand(0.9)]);
        assert!(sample[..FEATURE_DIM / 2].iter().all(|v| *v == 0.1));
        assert!(sample[FEATURE_DIM / 2..].iter().all(|v| *v == 0.2));
    }

    #[test]
    fn test_landmark_coordinate_order() {
        let mut landmarks = [Landmark::default(); LANDMARKS_PER_HAND];
        landmarks[0] = Landmark::new(0.1, 0.2, 0.3);
        landmarks[1] = Landmark::new(0.4, 0.5, 0.6);

        let sample = encode_hands(&[Hand::new(landmarks)]);
        assert_eq!(&sample[..6], &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    }
}
