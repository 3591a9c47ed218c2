#![deny(warnings)]

use std::error::Error;

use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use rusty_perceptron::{
    demo::{run_demo, DemoConfig, TrainingMode},
    plot::{plot_epoch_errors, BitmapPlotter},
    sampling::GaussianSampler,
    LinearClassifier,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Online,
    Batch,
}

impl From<Mode> for TrainingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Online => TrainingMode::Online,
            Mode::Batch => TrainingMode::Batch,
        }
    }
}

/// Train a perceptron on two Gaussian clusters and plot the decision boundary.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Epochs for batch training
    #[arg(long, default_value_t = 50)]
    epochs: usize,

    #[arg(long, default_value_t = 0.2)]
    step_size: f64,

    /// Points per cluster
    #[arg(long, default_value_t = 100)]
    count: usize,

    #[arg(long, value_enum, default_value_t = Mode::Online)]
    mode: Mode,

    /// Seed for both the sampled points and the initial online weights
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "perceptron.png")]
    output: String,

    /// Plot width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Also plot misclassified points per epoch (batch mode only)
    #[arg(long)]
    errors_output: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (mut classifier, rng) = match args.seed {
        Some(seed) => (
            LinearClassifier::with_seed(args.epochs, args.step_size, seed)?,
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (
            LinearClassifier::new(args.epochs, args.step_size)?,
            StdRng::from_entropy(),
        ),
    };
    let mut sampler = GaussianSampler::new(rng);
    let mut plotter = BitmapPlotter::new(&args.output).with_size(args.width, args.height);
    let config = DemoConfig::default()
        .with_count(args.count)
        .with_mode(args.mode.into());

    let report = run_demo(&mut classifier, &mut sampler, &mut plotter, &config)?;
    println!(
        "weights: {:?}, training accuracy: {:.3}",
        report.weights, report.training_accuracy
    );

    if let Some(path) = args.errors_output {
        if classifier.epoch_errors().is_empty() {
            tracing::warn!("no batch epochs recorded, skipping error plot");
        } else {
            plot_epoch_errors(classifier.epoch_errors(), &path)?;
        }
    }

    Ok(())
}
