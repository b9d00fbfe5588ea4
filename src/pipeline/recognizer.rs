//! Per-frame recognizer orchestrator
//!
//! Composes the pose encoder, sliding window, presence tracker, inference
//! adapter, and vote smoother into one synchronous `process_frame` call, and
//! applies the debounce rule that turns stabilized labels into non-repeating
//! "gesture recognized" events.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::inference::{Classifier, InferenceAdapter, LabelSet};
use crate::pipeline::presence::PresenceTracker;
use crate::pipeline::votes::VoteHistory;
use crate::pipeline::window::SlidingWindow;
use crate::pose::{encode_hands, Hand, FEATURE_DIM};

/// Recognizer tuning parameters.
///
/// All values are caller-supplied; the defaults mirror the trained model's
/// metadata (30-frame window, 126 features, 0.7 confidence floor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Samples per classifier input (sequence length)
    pub window_capacity: usize,
    /// Values per sample
    pub feature_dim: usize,
    /// Minimum prediction confidence to enter the vote history.
    /// Deployments vary between 0.7 and 0.85.
    pub min_confidence: f32,
    /// Consecutive hand-absent frames before window/history reset
    pub reset_threshold: u32,
    /// Accepted labels kept for majority-vote smoothing
    pub vote_history_size: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            window_capacity: 30,
            feature_dim: FEATURE_DIM,
            min_confidence: 0.7,
            reset_threshold: 10,
            vote_history_size: 15,
        }
    }
}

impl RecognizerConfig {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> crate::Result<()> {
        if self.window_capacity == 0 {
            return Err(crate::Error::Config(
                "window_capacity must be > 0".to_string(),
            ));
        }
        if self.feature_dim == 0 {
            return Err(crate::Error::Config("feature_dim must be > 0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(crate::Error::Config(format!(
                "min_confidence must be in [0, 1], got {}",
                self.min_confidence
            )));
        }
        if self.vote_history_size == 0 {
            return Err(crate::Error::Config(
                "vote_history_size must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-frame result of [`GestureRecognizer::process_frame`].
///
/// Exactly one outcome is produced per frame: low-confidence discards and
/// still-accumulating windows are `NoEvent`, never silent suppression mixed
/// with emission.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Nothing to report this frame
    NoEvent,
    /// A stabilized gesture crossed the debounce gate
    Recognized { label: String, confidence: f32 },
    /// The classifier failed on this frame; pipeline state is untouched
    InferenceFailed { reason: String },
}

/// Observable session counters
#[derive(Debug, Clone, Copy, Default)]
pub struct RecognizerStats {
    /// Total frames processed
    pub frames_processed: u64,
    /// Frames with no detected hands
    pub frames_without_hands: u64,
    /// Inference calls attempted on a full window
    pub inferences: u64,
    /// Predictions discarded by the confidence gate
    pub low_confidence_discards: u64,
    /// Inference calls that failed (classifier error or malformed output)
    pub inference_failures: u64,
    /// Recognized events emitted
    pub emissions: u64,
    /// Window/history clears caused by hand absence
    pub absence_resets: u64,
}

/// One recognition session: all mutable pipeline state plus the classifier.
///
/// Single logical thread of control: `process_frame` is synchronous and
/// non-reentrant, and instances share nothing, so one recognizer per
/// camera/session needs no locking.
pub struct GestureRecognizer<C: Classifier> {
    config: RecognizerConfig,
    window: SlidingWindow,
    presence: PresenceTracker,
    votes: VoteHistory,
    adapter: InferenceAdapter<C>,
    last_emitted: Option<String>,
    stats: RecognizerStats,
}

impl<C: Classifier> GestureRecognizer<C> {
    /// Create a recognizer for one session.
    ///
    /// Fails with a configuration error if `config` is out of range.
    pub fn new(config: RecognizerConfig, labels: LabelSet, classifier: C) -> crate::Result<Self> {
        config.validate()?;

        let adapter = InferenceAdapter::new(classifier, labels, config.min_confidence);

        Ok(Self {
            window: SlidingWindow::new(config.window_capacity),
            presence: PresenceTracker::new(config.reset_threshold),
            votes: VoteHistory::new(config.vote_history_size),
            adapter,
            last_emitted: None,
            stats: RecognizerStats::default(),
            config,
        })
    }

    /// Process one captured frame's detector output.
    ///
    /// Returns exactly one [`FrameOutcome`] per call.
    pub fn process_frame(&mut self, hands: &[Hand]) -> FrameOutcome {
        self.stats.frames_processed += 1;

        if hands.is_empty() {
            self.stats.frames_without_hands += 1;
            // Absence ages the window out rather than polluting it with
            // zero samples.
            if self.presence.mark_absent() && !self.window.is_empty() {
                self.window.clear();
                self.votes.clear();
                self.stats.absence_resets += 1;
                debug!(
                    absent_frames = self.presence.absent_frames(),
                    "window reset after hand absence"
                );
            }
            return FrameOutcome::NoEvent;
        }

        self.presence.mark_present();
        self.window.push(encode_hands(hands));

        if !self.window.is_full() {
            return FrameOutcome::NoEvent;
        }

        self.stats.inferences += 1;
        let prediction = match self.adapter.infer_window(&self.window, self.config.feature_dim) {
            Ok(Some(prediction)) => prediction,
            Ok(None) => {
                // Below the confidence floor: a normal discard, not an error
                self.stats.low_confidence_discards += 1;
                return FrameOutcome::NoEvent;
            }
            Err(e) => {
                // Recovered locally: skip the frame, leave window and votes
                // untouched so the next frame can retry.
                self.stats.inference_failures += 1;
                warn!(error = %e, "inference failed, skipping frame");
                return FrameOutcome::InferenceFailed {
                    reason: e.to_string(),
                };
            }
        };

        self.votes.push(prediction.label.clone());
        let smoothed = self
            .votes
            .resolve()
            .unwrap_or(prediction.label.as_str())
            .to_string();

        if self.last_emitted.as_deref() == Some(smoothed.as_str()) {
            // Same stabilized label as last emission: window keeps sliding,
            // inference re-runs next frame.
            return FrameOutcome::NoEvent;
        }

        // New stabilized label: emit once, then demand an entirely fresh
        // window of evidence before any further emission.
        self.last_emitted = Some(smoothed.clone());
        self.window.clear();
        self.votes.clear();
        self.stats.emissions += 1;
        info!(
            label = %smoothed,
            confidence = prediction.confidence,
            "gesture recognized"
        );

        FrameOutcome::Recognized {
            label: smoothed,
            confidence: prediction.confidence,
        }
    }

    /// Session-level reset: clears window, vote history, presence counter,
    /// and the last emitted label unconditionally.
    pub fn reset(&mut self) {
        self.window.clear();
        self.votes.clear();
        self.presence.reset();
        self.last_emitted = None;
        debug!("recognizer state reset");
    }

    /// The label of the most recent emission, if any
    pub fn last_emitted(&self) -> Option<&str> {
        self.last_emitted.as_deref()
    }

    /// Samples currently buffered
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Session counters
    pub fn stats(&self) -> &RecognizerStats {
        &self.stats
    }

    /// Recognizer configuration
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }
}
