//! Hand pose types and frame encoding
//!
//! The external detector produces, per frame, zero or more [`Hand`]s, each an
//! ordered list of 21 three-dimensional [`Landmark`]s. This module defines
//! those types and the encoder that turns one frame's hands into the
//! fixed-length numeric sample the classifier consumes.

pub mod encoder;
pub mod types;

pub use encoder::{encode_hands, Sample};
pub use types::{Hand, Landmark, COORDS_PER_LANDMARK, FEATURE_DIM, HAND_SLOTS, LANDMARKS_PER_HAND};
