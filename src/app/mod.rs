//! Application Layer
//!
//! User-facing CLI, configuration management, frame replay, and the
//! practice-mode policy filter.

pub mod cli;
pub mod config;
pub mod frames;
pub mod practice;

pub use cli::{Cli, Commands, ConfigAction};
pub use config::Config;
pub use frames::FrameSource;
pub use practice::{PracticeFilter, PracticeOutcome};
