//! Landmark and hand types shared across the pipeline

use serde::{Deserialize, Serialize};

/// Landmarks reported per detected hand (MediaPipe hand topology)
pub const LANDMARKS_PER_HAND: usize = 21;

/// Coordinates per landmark (x, y, z)
pub const COORDS_PER_LANDMARK: usize = 3;

/// Hand slots encoded per frame; extra detections are ignored
pub const HAND_SLOTS: usize = 2;

/// Fixed sample width: 21 landmarks x 3 coords x 2 hand slots = 126 values
pub const FEATURE_DIM: usize = LANDMARKS_PER_HAND * COORDS_PER_LANDMARK * HAND_SLOTS;

/// A single 3-D hand landmark.
///
/// The planar axes are typically normalized to `[0, 1]` by the detector and
/// `z` is relative depth; the engine passes coordinates through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One detected hand: exactly 21 landmarks in detector order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    landmarks: [Landmark; LANDMARKS_PER_HAND],
}

impl Hand {
    /// Create a hand from a fixed landmark array
    pub fn new(landmarks: [Landmark; LANDMARKS_PER_HAND]) -> Self {
        Self { landmarks }
    }

    /// Create a hand from a landmark slice, enforcing the detector contract
    /// of exactly 21 points.
    pub fn from_landmarks(landmarks: &[Landmark]) -> crate::Result<Self> {
        let landmarks: [Landmark; LANDMARKS_PER_HAND] =
            landmarks.try_into().map_err(|_| {
                crate::Error::FrameSource(format!(
                    "expected {} landmarks per hand, got {}",
                    LANDMARKS_PER_HAND,
                    landmarks.len()
                ))
            })?;
        Ok(Self { landmarks })
    }

    /// Landmarks in detector order
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_dim() {
        assert_eq!(FEATURE_DIM, 126);
    }

    #[test]
    fn test_hand_from_landmarks() {
        let points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARKS_PER_HAND];
        let hand = Hand::from_landmarks(&points).expect("21 points");
        assert_eq!(hand.landmarks().len(), LANDMARKS_PER_HAND);
    }

    #[test]
    fn test_hand_rejects_wrong_count() {
        let points = vec![Landmark::default(); 20];
        assert!(Hand::from_landmarks(&points).is_err());

        let points = vec![Landmark::default(); 22];
        assert!(Hand::from_landmarks(&points).is_err());
    }
}
