//! Two Gaussian clouds, one classifier, one picture.

use ndarray::array;
use tracing::info;

use crate::{
    classifier::LinearClassifier,
    error::Result,
    plot::Plotter,
    sampling::{ClusterSampler, ClusterSpec},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingMode {
    /// Every point through `observe_one`, in sampling order.
    Online,
    /// A single `train_batch` call over all points.
    Batch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub positive: ClusterSpec,
    pub negative: ClusterSpec,
    pub mode: TrainingMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            positive: ClusterSpec::isotropic(array![2.0, 2.0], 100, 1),
            negative: ClusterSpec::isotropic(array![-2.0, -2.0], 100, 0),
            mode: TrainingMode::Online,
        }
    }
}

impl DemoConfig {
    /// Same clusters with `count` points each.
    pub fn with_count(mut self, count: usize) -> Self {
        self.positive.count = count;
        self.negative.count = count;
        self
    }

    pub fn with_mode(mut self, mode: TrainingMode) -> Self {
        self.mode = mode;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub weights: Vec<f64>,
    /// Fraction of the sampled points the trained classifier gets right.
    pub training_accuracy: f64,
}

/// Samples both clusters (positives first), trains `classifier` in the
/// configured mode and hands the result to `plotter`.
pub fn run_demo<S, P>(
    classifier: &mut LinearClassifier,
    sampler: &mut S,
    plotter: &mut P,
    config: &DemoConfig,
) -> Result<DemoReport>
where
    S: ClusterSampler + ?Sized,
    P: Plotter + ?Sized,
{
    let (points, labels) =
        sampler.sample_all(&[config.positive.clone(), config.negative.clone()])?;
    info!(points = labels.len(), mode = ?config.mode, "sampled demo data");

    match config.mode {
        TrainingMode::Online => {
            for (x, y) in points.rows().into_iter().zip(labels.iter()) {
                classifier.observe_one(x, *y)?;
            }
        }
        TrainingMode::Batch => classifier.train_batch(points.view(), &labels)?,
    }

    let mut correct = 0;
    for (x, y) in points.rows().into_iter().zip(labels.iter()) {
        if classifier.predict(x)? == *y {
            correct += 1;
        }
    }
    let training_accuracy = if labels.is_empty() {
        0.0
    } else {
        correct as f64 / labels.len() as f64
    };

    plotter.render(&classifier.visualization()?)?;

    let weights = classifier
        .weights()
        .map(|w| w.to_vec())
        .unwrap_or_default();
    info!(?weights, training_accuracy, "demo finished");
    Ok(DemoReport {
        weights,
        training_accuracy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::PerceptronError, plot::VisualizationState, sampling::GaussianSampler};
    use ndarray::Array2;
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(Default)]
    struct RecordingPlotter {
        renders: Vec<(usize, Vec<f64>, String)>,
    }

    impl Plotter for RecordingPlotter {
        fn render(&mut self, state: &VisualizationState<'_>) -> Result<()> {
            self.renders
                .push((state.history.len(), state.weights.to_vec(), state.title()));
            Ok(())
        }
    }

    /// Returns the cluster mean repeated `count` times.
    struct MeanSampler;

    impl ClusterSampler for MeanSampler {
        fn sample(&mut self, spec: &ClusterSpec) -> Result<Array2<f64>> {
            let mut points = Array2::zeros((spec.count, spec.mean.len()));
            for mut row in points.rows_mut() {
                row.assign(&spec.mean);
            }
            Ok(points)
        }
    }

    #[test]
    fn test_batch_demo_separates_clusters() {
        let mut classifier = LinearClassifier::new(50, 0.2).unwrap();
        let mut sampler = GaussianSampler::new(StdRng::seed_from_u64(17));
        let mut plotter = RecordingPlotter::default();
        let config = DemoConfig::default().with_mode(TrainingMode::Batch);

        let report = run_demo(&mut classifier, &mut sampler, &mut plotter, &config).unwrap();

        assert!(report.training_accuracy > 0.95, "{}", report.training_accuracy);
        assert_eq!(1, plotter.renders.len());
        let (points, weights, title) = &plotter.renders[0];
        assert_eq!(200, *points);
        assert_eq!(&report.weights, weights);
        assert_eq!("Perceptron - Epochs: 50, Step Size: 0.2", title);
    }

    #[test]
    fn test_online_demo_feeds_every_point_in_order() {
        let mut classifier = LinearClassifier::with_seed(50, 0.2, 4).unwrap();
        let mut plotter = RecordingPlotter::default();
        let config = DemoConfig::default().with_count(3);

        run_demo(&mut classifier, &mut MeanSampler, &mut plotter, &config).unwrap();

        assert_eq!(&[1, 1, 1, 0, 0, 0], classifier.history().labels());
        assert_eq!(6, plotter.renders[0].0);
    }

    #[test]
    fn test_demo_needs_two_features() {
        let mut classifier = LinearClassifier::new(5, 0.2).unwrap();
        let mut plotter = RecordingPlotter::default();
        let config = DemoConfig {
            positive: ClusterSpec::isotropic(array![1.0, 1.0, 1.0], 2, 1),
            negative: ClusterSpec::isotropic(array![-1.0, -1.0, -1.0], 2, 0),
            mode: TrainingMode::Batch,
        };

        let err = run_demo(&mut classifier, &mut MeanSampler, &mut plotter, &config).unwrap_err();
        assert_eq!(
            PerceptronError::DimensionalityMismatch {
                expected: 2,
                actual: 3
            },
            err
        );
        assert!(plotter.renders.is_empty());
    }
}
