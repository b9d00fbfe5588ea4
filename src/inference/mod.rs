//! Classifier contract and confidence-gated inference
//!
//! The model itself is an external collaborator; this module owns everything
//! around the call: the label set loaded at startup, the input tensor
//! snapshot, output shape checking, the confidence gate, and an optional
//! bounded-timeout wrapper for slow classifiers.

pub mod adapter;
pub mod classifier;
pub mod labels;
pub mod timeout;

pub use adapter::InferenceAdapter;
pub use classifier::{Classifier, Prediction, ReplayClassifier, WindowTensor};
pub use labels::{LabelMetadata, LabelSet};
pub use timeout::TimeoutClassifier;
