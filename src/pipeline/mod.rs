//! The streaming recognition pipeline
//!
//! Everything with non-trivial state lives here: the bounded sample window,
//! the presence/absence tracker that resets it, the majority-vote history,
//! and the per-frame orchestrator with its debounce/emission controller.

pub mod presence;
pub mod recognizer;
pub mod votes;
pub mod window;

pub use presence::PresenceTracker;
pub use recognizer::{FrameOutcome, GestureRecognizer, RecognizerConfig, RecognizerStats};
pub use votes::VoteHistory;
pub use window::SlidingWindow;
