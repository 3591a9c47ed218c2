use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::{
    activation::{augment, step, transfer},
    boundary::DecisionBoundary,
    error::{PerceptronError, Result},
    history::TrainingHistory,
    init::WeightInit,
    plot::VisualizationState,
};

/// Fixed at construction. `epochs` only matters for batch training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameters {
    pub epochs: usize,
    pub step_size: f64,
}

impl Hyperparameters {
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(PerceptronError::InvalidHyperparameter(format!(
                "step size must be a positive finite number, got {}",
                self.step_size
            )));
        }
        Ok(())
    }
}

/// Misclassified examples seen at the start of one batch epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochErrors {
    pub epoch: usize,
    pub misclassified: usize,
}

impl From<&EpochErrors> for (usize, usize) {
    fn from(e: &EpochErrors) -> Self {
        let EpochErrors {
            epoch,
            misclassified,
        } = e;
        (*epoch, *misclassified)
    }
}

/// Binary linear classifier with a bias weight at index 0.
///
/// The classifier is untrained until the first call to [`observe_one`] or
/// [`train_batch`]; from then on it holds `p + 1` weights where `p` is the
/// feature count of the first training signal.
///
/// [`observe_one`]: LinearClassifier::observe_one
/// [`train_batch`]: LinearClassifier::train_batch
pub struct LinearClassifier {
    hyperparameters: Hyperparameters,
    weights: Option<Array1<f64>>,
    history: TrainingHistory,
    epoch_errors: Vec<EpochErrors>,
    rng: StdRng,
}

impl LinearClassifier {
    pub fn new(epochs: usize, step_size: f64) -> Result<Self> {
        Self::with_rng(epochs, step_size, StdRng::from_entropy())
    }

    /// Same as [`LinearClassifier::new`] but the random initial weights of
    /// online training are reproducible.
    pub fn with_seed(epochs: usize, step_size: f64, seed: u64) -> Result<Self> {
        Self::with_rng(epochs, step_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(epochs: usize, step_size: f64, rng: StdRng) -> Result<Self> {
        let hyperparameters = Hyperparameters { epochs, step_size };
        hyperparameters.validate()?;
        Ok(Self {
            hyperparameters,
            weights: None,
            history: TrainingHistory::new(),
            epoch_errors: Vec::new(),
            rng,
        })
    }

    /// Online update from a single example.
    ///
    /// The first call fixes the dimensionality and draws the initial weights
    /// from `[0, 1)`. The update uses the unthresholded score:
    /// `w <- w + step_size * (w·x_aug - y) * x_aug`.
    pub fn observe_one(&mut self, x: ArrayView1<f64>, y: u8) -> Result<()> {
        check_label(y)?;
        if let Some(p) = self.dimensionality() {
            check_dimensionality(p, x.len())?;
        }

        let step_size = self.hyperparameters.step_size;
        let rng = &mut self.rng;
        let w = self
            .weights
            .get_or_insert_with(|| WeightInit::UniformRandom.weights(x.len(), rng));

        let x_aug = augment(x);
        let y_hat = transfer(w.view(), x_aug.view());
        w.scaled_add(step_size * (y_hat - f64::from(y)), &x_aug);
        debug!(y, y_hat, "observed example");

        self.history.push(x_aug, y);
        Ok(())
    }

    /// Full-batch training for the configured number of epochs.
    ///
    /// Always restarts from zero weights, so identical inputs give identical
    /// weights. Each epoch thresholds every score, then applies
    /// `w <- w - (step_size / N) * X_aug^T (y_hat - y)`.
    pub fn train_batch(&mut self, x: ArrayView2<f64>, y: &[u8]) -> Result<()> {
        let (n, p) = x.dim();
        if n != y.len() {
            return Err(PerceptronError::ShapeMismatch {
                rows: n,
                labels: y.len(),
            });
        }
        if n == 0 {
            return Err(PerceptronError::EmptyTrainingSet);
        }
        for label in y {
            check_label(*label)?;
        }

        // Design matrix with a leading column of ones
        let mut design = Array2::ones((n, p + 1));
        design.slice_mut(s![.., 1..]).assign(&x);
        let targets: Array1<f64> = y.iter().map(|&label| f64::from(label)).collect();

        let Hyperparameters { epochs, step_size } = self.hyperparameters;
        info!(examples = n, features = p, epochs, step_size, "batch training");

        let mut w = WeightInit::Zeros.weights(p, &mut self.rng);
        let mut epoch_errors = Vec::with_capacity(epochs);
        for epoch in 0..epochs {
            let predictions = design.dot(&w).mapv(step);
            let error = &predictions - &targets;
            let misclassified = error.iter().filter(|e| **e != 0.0).count();

            w.scaled_add(-step_size / n as f64, &design.t().dot(&error));

            debug!(epoch, misclassified, "batch epoch");
            epoch_errors.push(EpochErrors {
                epoch,
                misclassified,
            });
        }

        info!(
            misclassified = epoch_errors.last().map(|e| e.misclassified),
            "batch training done"
        );
        self.history.replace_with(design.view(), y);
        self.epoch_errors = epoch_errors;
        self.weights = Some(w);
        Ok(())
    }

    /// Raw score `w · x_aug` before thresholding.
    pub fn decision_function(&self, x: ArrayView1<f64>) -> Result<f64> {
        let w = self
            .weights
            .as_ref()
            .ok_or(PerceptronError::UninitializedModel)?;
        check_dimensionality(w.len() - 1, x.len())?;
        Ok(transfer(w.view(), augment(x).view()))
    }

    /// Predicted class, 0 or 1.
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<u8> {
        let score = self.decision_function(x)?;
        Ok(step(score) as u8)
    }

    /// Everything a plotter needs. Only defined for two features.
    pub fn visualization(&self) -> Result<VisualizationState<'_>> {
        let w = self
            .weights
            .as_ref()
            .ok_or(PerceptronError::UninitializedModel)?;
        check_dimensionality(2, w.len() - 1)?;
        Ok(VisualizationState {
            history: &self.history,
            weights: w.view(),
            boundary: DecisionBoundary::from_weights(w.view())?,
            hyperparameters: self.hyperparameters,
        })
    }

    pub fn weights(&self) -> Option<ArrayView1<'_, f64>> {
        self.weights.as_ref().map(|w| w.view())
    }

    /// Feature count `p`, once a training signal has been seen.
    pub fn dimensionality(&self) -> Option<usize> {
        self.weights.as_ref().map(|w| w.len() - 1)
    }

    pub fn hyperparameters(&self) -> Hyperparameters {
        self.hyperparameters
    }

    pub fn epochs(&self) -> usize {
        self.hyperparameters.epochs
    }

    pub fn step_size(&self) -> f64 {
        self.hyperparameters.step_size
    }

    pub fn history(&self) -> &TrainingHistory {
        &self.history
    }

    /// Per-epoch errors of the last batch run.
    pub fn epoch_errors(&self) -> &[EpochErrors] {
        &self.epoch_errors
    }
}

fn check_label(y: u8) -> Result<()> {
    if y > 1 {
        return Err(PerceptronError::InvalidLabel(y));
    }
    Ok(())
}

fn check_dimensionality(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PerceptronError::DimensionalityMismatch { expected, actual });
    }
    Ok(())
}
