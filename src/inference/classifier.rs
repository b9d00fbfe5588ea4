//! External classifier contract

use std::collections::VecDeque;
use std::io::BufRead;
use std::path::Path;

/// Snapshot of a full window as a `[frames, features]` tensor, flattened
/// row-major with the oldest frame first.
///
/// Taken at submission time, so the live window may keep sliding while an
/// offloaded inference is in flight.
#[derive(Debug, Clone)]
pub struct WindowTensor {
    data: Vec<f32>,
    frames: usize,
    features: usize,
}

impl WindowTensor {
    /// Build a tensor, checking that the flat data matches the shape
    pub fn new(data: Vec<f32>, frames: usize, features: usize) -> crate::Result<Self> {
        if data.len() != frames * features {
            return Err(crate::Error::Inference(format!(
                "tensor data has {} values, shape [{}, {}] needs {}",
                data.len(),
                frames,
                features,
                frames * features
            )));
        }
        Ok(Self {
            data,
            frames,
            features,
        })
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn features(&self) -> usize {
        self.features
    }

    /// Flat data, oldest frame first
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// One frame's feature row
    pub fn frame(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(self.features)?;
        self.data.get(start..start + self.features)
    }
}

/// The external pre-trained classifier.
///
/// `infer` receives a full-window tensor and must return one probability per
/// class, in the label set's fixed order. Implementations wrap whatever
/// runtime actually executes the model; the engine never loads weights
/// itself.
pub trait Classifier {
    fn infer(&mut self, input: &WindowTensor) -> crate::Result<Vec<f32>>;
}

/// One accepted inference result
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Argmax index into the label set
    pub class_index: usize,
    /// Label at that index
    pub label: String,
    /// Probability of the winning class
    pub confidence: f32,
}

/// Classifier that replays a recorded sequence of probability vectors,
/// one per inference call.
///
/// Used to drive the pipeline without a model runtime: in tests, and by the
/// `run` subcommand to replay captured sessions. Errors once the recorded
/// outputs are exhausted.
#[derive(Debug, Clone)]
pub struct ReplayClassifier {
    outputs: VecDeque<Vec<f32>>,
}

impl ReplayClassifier {
    /// Replay an in-memory output sequence
    pub fn from_outputs(outputs: Vec<Vec<f32>>) -> Self {
        Self {
            outputs: outputs.into(),
        }
    }

    /// Load outputs from a JSONL file, one probability array per line.
    /// Blank lines are skipped.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut outputs = VecDeque::new();

        for (line_no, line) in std::io::BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let probs: Vec<f32> = serde_json::from_str(&line).map_err(|e| {
                crate::Error::Inference(format!(
                    "{}:{}: malformed probability vector: {}",
                    path.display(),
                    line_no + 1,
                    e
                ))
            })?;
            outputs.push_back(probs);
        }

        Ok(Self { outputs })
    }

    /// Recorded outputs not yet consumed
    pub fn remaining(&self) -> usize {
        self.outputs.len()
    }
}

impl Classifier for ReplayClassifier {
    fn infer(&mut self, _input: &WindowTensor) -> crate::Result<Vec<f32>> {
        self.outputs
            .pop_front()
            .ok_or_else(|| crate::Error::Inference("replay outputs exhausted".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_tensor_shape_checked() {
        assert!(WindowTensor::new(vec![0.0; 6], 2, 3).is_ok());
        assert!(WindowTensor::new(vec![0.0; 5], 2, 3).is_err());
    }

    #[test]
    fn test_tensor_frame_rows() {
        let tensor = WindowTensor::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(tensor.frame(0), Some(&[1.0, 2.0][..]));
        assert_eq!(tensor.frame(1), Some(&[3.0, 4.0][..]));
        assert_eq!(tensor.frame(2), None);
    }

    #[test]
    fn test_replay_consumes_in_order() {
        let mut classifier =
            ReplayClassifier::from_outputs(vec![vec![0.9, 0.1], vec![0.2, 0.8]]);
        let tensor = WindowTensor::new(vec![0.0; 4], 2, 2).unwrap();

        assert_eq!(classifier.infer(&tensor).unwrap(), vec![0.9, 0.1]);
        assert_eq!(classifier.infer(&tensor).unwrap(), vec![0.2, 0.8]);
        assert!(classifier.infer(&tensor).is_err());
    }

    #[test]
    fn test_replay_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[0.9, 0.1]").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "[0.3, 0.7]").unwrap();

        let classifier = ReplayClassifier::from_file(file.path()).unwrap();
        assert_eq!(classifier.remaining(), 2);
    }

    #[test]
    fn test_replay_from_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(ReplayClassifier::from_file(file.path()).is_err());
    }
}
