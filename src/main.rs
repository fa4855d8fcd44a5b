use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use signpose::{
    Finger, LandmarkFrame, RecognitionHistory, RecognizerConfig, SignLanguageRecognizer,
};

/// Replays recorded hand landmarks through the sign recognizer.
///
/// Input holds one JSON array of 21 `[x, y, z]` points per line.
#[derive(Debug, Parser)]
#[command(name = "signpose", version)]
struct Args {
    /// Landmark recording, or `-` for stdin.
    #[arg(default_value = "-")]
    input: String,

    /// TOML file with recognizer settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the minimum gesture score (0-10).
    #[arg(long)]
    threshold: Option<f32>,

    /// Classify all frames at once on the thread pool.
    #[arg(long)]
    batch: bool,

    /// Log the detected curl of every finger.
    #[arg(long)]
    poses: bool,
}

fn read_frames(input: &str) -> Result<Vec<Vec<[f32; 3]>>> {
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(input).with_context(|| format!("failed to open {}", input))?;
        Box::new(BufReader::new(file))
    };

    let mut frames = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.context("failed to read landmark recording")?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Vec<[f32; 3]>>(&line) {
            Ok(points) => frames.push(points),
            Err(e) => warn!(line = n + 1, "skipping malformed frame: {}", e),
        }
    }
    Ok(frames)
}

fn log_pose(recognizer: &SignLanguageRecognizer, n: usize, points: &[[f32; 3]]) {
    let Ok(frame) = LandmarkFrame::from_points(points) else {
        return;
    };
    let pose = recognizer.estimator().analyze(&frame);
    let curls: Vec<String> = Finger::ALL
        .iter()
        .map(|f| format!("{}={}", f.as_str(), pose.curl(*f).as_str()))
        .collect();
    info!(frame = n, "{}", curls.join(" "));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RecognizerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RecognizerConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
        config.validate()?;
    }

    let mut recognizer = SignLanguageRecognizer::new(config);
    recognizer.initialize();

    let frames = read_frames(&args.input)?;
    info!(frames = frames.len(), "loaded landmark recording");

    let results: Vec<Option<&str>> = if args.batch {
        recognizer.recognize_batch(&frames)
    } else {
        frames.iter().map(|f| recognizer.recognize(f)).collect()
    };

    let mut history = RecognitionHistory::default();
    for (n, (points, result)) in frames.iter().zip(&results).enumerate() {
        if args.poses {
            log_pose(&recognizer, n, points);
        }
        println!("frame {}: {}", n, result.unwrap_or("-"));
        if let Some(name) = result {
            history.push(name);
        }
    }

    println!("history: {}", history.transcript());
    Ok(())
}
