//! dermascan CLI - classify a skin lesion image with a bundled model.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dermascan::{image, Classifier, ModelHandle, Result};

/// Classify a skin lesion image as Positive or Negative.
#[derive(Parser, Debug)]
#[command(name = "dermascan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path.
    #[arg(value_name = "IMAGE")]
    input: PathBuf,

    /// Path to the ONNX classification model.
    #[arg(short, long, default_value = "cancer_classification.onnx", value_name = "PATH")]
    model: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("dermascan={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err}");
        // All failure causes collapse to one user-facing message
        eprintln!("{}", err.user_message());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    // The model handle lives for exactly one classification pass
    let model = ModelHandle::load(&args.model)?;
    let mut classifier = Classifier::new(model);

    let img = image::load_image(&args.input)?;
    let prediction = classifier.classify(&img)?;

    println!(
        "Prediction: {}\nConfidence: {}",
        prediction.label, prediction.confidence
    );

    Ok(())
}
