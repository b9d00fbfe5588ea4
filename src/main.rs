//! Signstream - Streaming sign-language gesture recognition
//!
//! Replays recorded detector/classifier sessions through the recognition
//! pipeline and reports recognized gestures.

use std::path::{Path, PathBuf};
use std::time::Duration;

use signstream::app::cli::{Cli, Commands, ConfigAction};
use signstream::app::config::Config;
use signstream::app::frames::FrameSource;
use signstream::app::practice::{PracticeFilter, PracticeOutcome};
use signstream::inference::{Classifier, LabelSet, ReplayClassifier, TimeoutClassifier};
use signstream::pipeline::{FrameOutcome, GestureRecognizer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Run {
            frames,
            predictions,
            labels,
            target,
            min_confidence,
        } => {
            run_replay(&frames, &predictions, labels, target, min_confidence, &config)?;
        }
        Commands::Labels { path } => {
            run_labels(&path)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_replay(
    frames: &Path,
    predictions: &Path,
    labels: Option<PathBuf>,
    target: Option<String>,
    min_confidence: Option<f32>,
    config: &Config,
) -> anyhow::Result<()> {
    let labels_path = labels.unwrap_or_else(|| config.session.labels_path.clone());
    let (label_set, metadata) = LabelSet::load(&labels_path)?;
    info!(
        classes = label_set.len(),
        path = %labels_path.display(),
        "label set loaded"
    );

    let mut recognizer_config = config.recognizer.clone();
    if config.session.apply_metadata_hints {
        recognizer_config = metadata.apply_to(recognizer_config);
    }
    if let Some(threshold) = min_confidence {
        recognizer_config.min_confidence = threshold;
    }

    let classifier = ReplayClassifier::from_file(predictions)?;
    info!(outputs = classifier.remaining(), "classifier replay loaded");

    let timeout_ms = config.session.inference_timeout_ms;
    if timeout_ms > 0 {
        let classifier =
            TimeoutClassifier::spawn(classifier, Duration::from_millis(timeout_ms));
        let recognizer = GestureRecognizer::new(recognizer_config, label_set, classifier)?;
        replay_session(recognizer, frames, target)
    } else {
        let recognizer = GestureRecognizer::new(recognizer_config, label_set, classifier)?;
        replay_session(recognizer, frames, target)
    }
}

fn replay_session<C: Classifier>(
    mut recognizer: GestureRecognizer<C>,
    frames: &Path,
    target: Option<String>,
) -> anyhow::Result<()> {
    let mut practice = target.map(PracticeFilter::new);
    if let Some(p) = &practice {
        info!(target = p.target(), "practice mode");
    }

    for (frame_no, hands) in FrameSource::open(frames)?.enumerate() {
        let hands = hands?;
        let outcome = recognizer.process_frame(&hands);

        match &outcome {
            FrameOutcome::Recognized { label, confidence } => {
                println!(
                    "frame {}: {} ({:.0}%)",
                    frame_no + 1,
                    label,
                    confidence * 100.0
                );
            }
            FrameOutcome::InferenceFailed { reason } => {
                warn!(frame = frame_no + 1, reason = %reason, "frame skipped");
            }
            FrameOutcome::NoEvent => {}
        }

        if let Some(p) = &mut practice {
            match p.observe(&outcome) {
                Some(PracticeOutcome::Hit) => println!("  ✅ target '{}' hit", p.target()),
                Some(PracticeOutcome::Miss) => println!("  ❌ expected '{}'", p.target()),
                None => {}
            }
        }
    }

    let stats = recognizer.stats();
    info!(
        frames = stats.frames_processed,
        inferences = stats.inferences,
        emissions = stats.emissions,
        low_confidence = stats.low_confidence_discards,
        failures = stats.inference_failures,
        absence_resets = stats.absence_resets,
        "replay finished"
    );

    if let Some(p) = &practice {
        println!("practice: {}/{} hits", p.hits(), p.attempts());
    }

    Ok(())
}

fn run_labels(path: &Path) -> anyhow::Result<()> {
    let (label_set, metadata) = LabelSet::load(path)?;

    println!("{} gestures:", label_set.len());
    for (index, label) in label_set.iter().enumerate() {
        println!("  {:3}  {}", index, label);
    }

    if let Some(timesteps) = metadata.timesteps {
        println!("window: {} frames", timesteps);
    }
    if let Some(features) = metadata.features {
        println!("features: {}", features);
    }
    if let Some(threshold) = metadata.min_confidence_threshold {
        println!("confidence floor: {}", threshold);
    }

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let path = Config::default_path();

    if path.exists() && !force {
        warn!("Config already exists at {:?}. Use --force to overwrite.", path);
        return Ok(());
    }

    config.save(&path)?;
    info!("Config written to {:?}", path);

    // Make sure the defaults round-trip before anyone edits the file
    let reloaded = Config::load(&path)?;
    reloaded.validate()?;

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Reset { force } => {
            let path = Config::default_path();
            if path.exists() && !force {
                warn!("Use --force to reset {:?}", path);
                return Ok(());
            }
            Config::default().save(&path)?;
            info!("Config reset to defaults at {:?}", path);
        }
    }
    Ok(())
}
