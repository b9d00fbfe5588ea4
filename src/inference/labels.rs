//! Gesture label set
//!
//! Label ordering is fixed at load time: probability index `i` from the
//! classifier always means `classes[i]`. The on-disk form is the metadata
//! JSON exported alongside the trained model.

use std::path::Path;

use serde::Deserialize;

/// Model metadata as exported next to the trained weights.
///
/// Only `classes` is required; the pipeline parameters are optional hints
/// that can seed a [`RecognizerConfig`](crate::RecognizerConfig).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelMetadata {
    pub classes: Vec<String>,
    #[serde(default)]
    pub num_classes: Option<usize>,
    #[serde(default)]
    pub timesteps: Option<usize>,
    #[serde(default)]
    pub features: Option<usize>,
    #[serde(default)]
    pub min_confidence_threshold: Option<f32>,
    #[serde(default)]
    pub buffer_size: Option<usize>,
    #[serde(default)]
    pub reset_threshold: Option<u32>,
}

impl LabelMetadata {
    /// Apply the metadata's pipeline hints on top of a base config.
    /// Fields absent from the metadata keep their base values.
    pub fn apply_to(&self, mut config: crate::RecognizerConfig) -> crate::RecognizerConfig {
        if let Some(timesteps) = self.timesteps.or(self.buffer_size) {
            config.window_capacity = timesteps;
        }
        if let Some(features) = self.features {
            config.feature_dim = features;
        }
        if let Some(threshold) = self.min_confidence_threshold {
            config.min_confidence = threshold;
        }
        if let Some(reset) = self.reset_threshold {
            config.reset_threshold = reset;
        }
        config
    }
}

/// The fixed, ordered gesture label set.
#[derive(Debug, Clone)]
pub struct LabelSet {
    classes: Vec<String>,
}

impl LabelSet {
    /// Build a label set from an ordered class list.
    ///
    /// Fails on an empty list or duplicate labels, since either makes argmax
    /// indices ambiguous.
    pub fn from_classes(classes: Vec<String>) -> crate::Result<Self> {
        if classes.is_empty() {
            return Err(crate::Error::LabelSet(
                "label set must contain at least one class".to_string(),
            ));
        }
        for (i, class) in classes.iter().enumerate() {
            if class.trim().is_empty() {
                return Err(crate::Error::LabelSet(format!("class {} is empty", i)));
            }
            if classes[..i].contains(class) {
                return Err(crate::Error::LabelSet(format!(
                    "duplicate class '{}'",
                    class
                )));
            }
        }
        Ok(Self { classes })
    }

    /// Load the label set from a model metadata JSON file.
    /// A missing or malformed file is fatal at startup.
    pub fn load(path: &Path) -> crate::Result<(Self, LabelMetadata)> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::LabelSet(format!("cannot read {}: {}", path.display(), e))
        })?;
        let metadata: LabelMetadata = serde_json::from_str(&content).map_err(|e| {
            crate::Error::LabelSet(format!("malformed metadata {}: {}", path.display(), e))
        })?;

        if let Some(declared) = metadata.num_classes {
            if declared != metadata.classes.len() {
                return Err(crate::Error::LabelSet(format!(
                    "numClasses is {} but {} classes listed",
                    declared,
                    metadata.classes.len()
                )));
            }
        }

        let label_set = Self::from_classes(metadata.classes.clone())?;
        Ok((label_set, metadata))
    }

    /// Label at a probability index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Labels in probability order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}
