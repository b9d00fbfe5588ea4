//! Criterion benchmarks for performance-critical hot paths
//!
//! Covers: window push/snapshot, majority-vote resolution, and the full
//! per-frame recognizer step.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use signstream::inference::{Classifier, LabelSet, WindowTensor};
use signstream::pipeline::{GestureRecognizer, RecognizerConfig, SlidingWindow, VoteHistory};
use signstream::pose::{encode_hands, Hand, Landmark, FEATURE_DIM, LANDMARKS_PER_HAND};

fn make_hand() -> Hand {
    Hand::new([Landmark::new(0.4, 0.6, -0.01); LANDMARKS_PER_HAND])
}

struct ConstClassifier {
    output: Vec<f32>,
}

impl Classifier for ConstClassifier {
    fn infer(&mut self, _input: &WindowTensor) -> signstream::Result<Vec<f32>> {
        Ok(self.output.clone())
    }
}

// ---------------------------------------------------------------------------
// Window benchmarks
// ---------------------------------------------------------------------------

fn bench_window_push(c: &mut Criterion) {
    c.bench_function("window_push", |b| {
        let mut window = SlidingWindow::new(30);
        let sample = vec![0.5f32; FEATURE_DIM];

        b.iter(|| {
            window.push(black_box(sample.clone()));
        });
    });
}

fn bench_window_snapshot(c: &mut Criterion) {
    c.bench_function("window_snapshot", |b| {
        let mut window = SlidingWindow::new(30);
        for _ in 0..30 {
            window.push(vec![0.5f32; FEATURE_DIM]);
        }

        b.iter(|| black_box(window.to_flat()));
    });
}

// ---------------------------------------------------------------------------
// Vote and encoder benchmarks
// ---------------------------------------------------------------------------

fn bench_vote_resolution(c: &mut Criterion) {
    c.bench_function("vote_resolve", |b| {
        let mut history = VoteHistory::new(15);
        let labels = ["A", "B", "OI", "TCHAU"];
        for i in 0..15 {
            history.push(labels[i % labels.len()].to_string());
        }

        b.iter(|| black_box(history.resolve()));
    });
}

fn bench_encode_two_hands(c: &mut Criterion) {
    c.bench_function("encode_two_hands", |b| {
        let hands = vec![make_hand(), make_hand()];
        b.iter(|| black_box(encode_hands(black_box(&hands))));
    });
}

// ---------------------------------------------------------------------------
// Full per-frame step
// ---------------------------------------------------------------------------

fn bench_process_frame(c: &mut Criterion) {
    c.bench_function("process_frame_full_window", |b| {
        let labels =
            LabelSet::from_classes(vec!["A".to_string(), "B".to_string()]).unwrap();
        let classifier = ConstClassifier {
            // Below the confidence floor so state never clears mid-benchmark
            output: vec![0.5, 0.5],
        };
        let mut recognizer =
            GestureRecognizer::new(RecognizerConfig::default(), labels, classifier).unwrap();

        let hands = vec![make_hand(), make_hand()];
        for _ in 0..30 {
            recognizer.process_frame(&hands);
        }

        b.iter(|| black_box(recognizer.process_frame(black_box(&hands))));
    });
}

criterion_group!(
    benches,
    bench_window_push,
    bench_window_snapshot,
    bench_vote_resolution,
    bench_encode_two_hands,
    bench_process_frame
);
criterion_main!(benches);
