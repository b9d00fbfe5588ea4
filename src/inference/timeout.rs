//! Bounded-timeout classifier wrapper
//!
//! The classifier call is the only potentially slow step in the per-frame
//! loop. This wrapper runs the wrapped classifier on a dedicated worker
//! thread and bounds each call: expiry is reported as an ordinary inference
//! failure, so the recognizer skips the frame and keeps going.
//!
//! Requests carry sequence numbers. When a call times out, its result may
//! still arrive later; subsequent calls discard any response tagged with an
//! older sequence, so a late result can never stand in for a newer frame's
//! inference.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::classifier::{Classifier, WindowTensor};

struct Request {
    seq: u64,
    tensor: WindowTensor,
}

struct Response {
    seq: u64,
    result: crate::Result<Vec<f32>>,
}

/// Runs an inner [`Classifier`] on a worker thread with a per-call deadline.
///
/// The input tensor is already a snapshot of the window at submission time,
/// so the live window may keep sliding while inference is in flight.
pub struct TimeoutClassifier {
    requests: Sender<Request>,
    responses: Receiver<Response>,
    timeout: Duration,
    next_seq: u64,
}

impl TimeoutClassifier {
    /// Spawn the worker thread around `inner`.
    ///
    /// The worker exits when the `TimeoutClassifier` is dropped.
    pub fn spawn<C>(inner: C, timeout: Duration) -> Self
    where
        C: Classifier + Send + 'static,
    {
        let (req_tx, req_rx) = mpsc::channel::<Request>();
        let (resp_tx, resp_rx) = mpsc::channel::<Response>();

        thread::spawn(move || {
            let mut classifier = inner;
            while let Ok(request) = req_rx.recv() {
                let result = classifier.infer(&request.tensor);
                if resp_tx
                    .send(Response {
                        seq: request.seq,
                        result,
                    })
                    .is_err()
                {
                    break;
                }
            }
        });

        Self {
            requests: req_tx,
            responses: resp_rx,
            timeout,
            next_seq: 0,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Classifier for TimeoutClassifier {
    fn infer(&mut self, input: &WindowTensor) -> crate::Result<Vec<f32>> {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.requests
            .send(Request {
                seq,
                tensor: input.clone(),
            })
            .map_err(|_| crate::Error::Inference("inference worker is gone".to_string()))?;

        let deadline = Instant::now() + self.timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.responses.recv_timeout(remaining) {
                Ok(response) if response.seq == seq => return response.result,
                Ok(response) => {
                    // Result from an earlier call that already timed out
                    debug!(
                        stale_seq = response.seq,
                        current_seq = seq,
                        "discarding late inference result"
                    );
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(crate::Error::Inference(format!(
                        "inference timed out after {:?}",
                        self.timeout
                    )));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(crate::Error::Inference(
                        "inference worker is gone".to_string(),
                    ));
                }
            }
        }
    }
}
