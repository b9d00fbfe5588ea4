//! # Signstream
//!
//! A streaming sign-language gesture recognition engine. Signstream turns the
//! noisy per-frame output of an external hand-pose detector into stable,
//! non-repeating "gesture recognized" events.
//!
//! ## Overview
//!
//! Each captured frame yields zero or more detected hands, every hand an
//! ordered list of 21 three-dimensional landmarks. Frames are encoded into
//! fixed-length samples and accumulated in a sliding window. Once the window
//! is full, a pre-trained classifier scores it; confident predictions feed a
//! short majority-vote history, and a debounce controller decides when the
//! stabilized label becomes a user-visible event.
//!
//! ## Quick Start
//!
//! ```no_run
//! use signstream::{FrameOutcome, GestureRecognizer, RecognizerConfig};
//! use signstream::inference::{LabelSet, ReplayClassifier};
//!
//! let labels = LabelSet::from_classes(vec!["A".into(), "B".into()]).expect("labels");
//! let classifier = ReplayClassifier::from_outputs(vec![vec![0.9, 0.1]]);
//!
//! let mut recognizer =
//!     GestureRecognizer::new(RecognizerConfig::default(), labels, classifier)
//!         .expect("valid config");
//!
//! // ... per captured frame, with `hands` from the external detector ...
//! # let hands = vec![];
//! match recognizer.process_frame(&hands) {
//!     FrameOutcome::Recognized { label, confidence } => {
//!         println!("{label} ({:.0}%)", confidence * 100.0);
//!     }
//!     FrameOutcome::NoEvent => {}
//!     FrameOutcome::InferenceFailed { reason } => eprintln!("skipped frame: {reason}"),
//! }
//! ```
//!
//! ## Architecture
//!
//! The system is organized into the following modules:
//!
//! - [`pose`]: hand landmark types and the frame-to-sample encoder
//! - [`pipeline`]: sliding window, presence tracking, vote smoothing, and the
//!   per-frame recognizer orchestrator
//! - [`inference`]: the external classifier contract, label set loading, and
//!   the confidence-gated inference adapter
//! - [`app`]: CLI, configuration management, frame replay, and practice mode
//!
//! ## Frame Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Detector  │───▶│    Pose     │───▶│   Sliding   │───▶│  Inference  │
//! │  (external) │    │   Encoder   │    │   Window    │    │   Adapter   │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                           │                  ▲                  │
//!                           ▼                  │ clear            ▼
//!                    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//!                    │  Presence   │───▶│  Debounce/  │◀───│    Vote     │
//!                    │   Tracker   │    │  Emission   │    │  Smoother   │
//!                    └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! The recognizer is single-threaded by design: one `process_frame` call per
//! captured frame, synchronous and non-reentrant. Independent recognizer
//! instances (one per camera or session) share no state.

pub mod app;
pub mod inference;
pub mod pipeline;
pub mod pose;

// Re-export commonly used types
pub use inference::{Classifier, LabelSet, Prediction, WindowTensor};
pub use pipeline::{FrameOutcome, GestureRecognizer, RecognizerConfig, RecognizerStats};
pub use pose::{Hand, Landmark, FEATURE_DIM, LANDMARKS_PER_HAND};

/// Result type alias for the recognition engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the recognition engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Label set error: {0}")]
    LabelSet(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Frame source error: {0}")]
    FrameSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
