//! Confidence-gated inference adapter
//!
//! Wraps the external classifier call with contract checking on both sides:
//! the input must be a full window of the configured shape, and the output
//! must be a well-formed probability vector over the label set. A failing
//! classifier is reported to the caller, never allowed to poison pipeline
//! state.

use super::classifier::{Classifier, Prediction, WindowTensor};
use super::labels::LabelSet;
use crate::pipeline::SlidingWindow;

/// Shape-checked, confidence-gated wrapper around a [`Classifier`].
pub struct InferenceAdapter<C: Classifier> {
    classifier: C,
    labels: LabelSet,
    min_confidence: f32,
}

impl<C: Classifier> InferenceAdapter<C> {
    pub fn new(classifier: C, labels: LabelSet, min_confidence: f32) -> Self {
        Self {
            classifier,
            labels,
            min_confidence,
        }
    }

    /// Run one inference on a full window.
    ///
    /// Returns `Ok(Some(prediction))` for a confident result,
    /// `Ok(None)` when the winning probability is below the confidence floor
    /// (a normal discard), and `Err` for classifier failures or malformed
    /// output. The window itself is never mutated here.
    pub fn infer_window(
        &mut self,
        window: &SlidingWindow,
        feature_dim: usize,
    ) -> crate::Result<Option<Prediction>> {
        if !window.is_full() {
            return Err(crate::Error::Inference(format!(
                "inference requires a full window, got {}/{} samples",
                window.len(),
                window.capacity()
            )));
        }

        let tensor = WindowTensor::new(window.to_flat(), window.len(), feature_dim)?;
        let probabilities = self.classifier.infer(&tensor)?;
        let prediction = self.to_prediction(&probabilities)?;

        if prediction.confidence < self.min_confidence {
            return Ok(None);
        }
        Ok(Some(prediction))
    }

    /// Validate a probability vector and take its argmax.
    fn to_prediction(&self, probabilities: &[f32]) -> crate::Result<Prediction> {
        if probabilities.len() != self.labels.len() {
            return Err(crate::Error::Inference(format!(
                "classifier returned {} probabilities for {} classes",
                probabilities.len(),
                self.labels.len()
            )));
        }

        let mut class_index = 0;
        let mut best = f32::NEG_INFINITY;
        for (i, &p) in probabilities.iter().enumerate() {
            if !p.is_finite() || p < 0.0 {
                return Err(crate::Error::Inference(format!(
                    "probability {} at index {} is not a valid probability",
                    p, i
                )));
            }
            // Strict comparison keeps the first index on exact ties
            if p > best {
                best = p;
                class_index = i;
            }
        }

        let label = self
            .labels
            .get(class_index)
            .ok_or_else(|| {
                crate::Error::Inference(format!("no label at index {}", class_index))
            })?
            .to_string();

        Ok(Prediction {
            class_index,
            label,
            confidence: best,
        })
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }
}
