use ndarray::Array1;
use rand::{distributions::Uniform, Rng};

/// How the weight vector (bias included) is seeded when training starts fresh.
///
/// Online training starts from random weights and batch training from zeros.
/// The two are kept apart on purpose: batch mode must be fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightInit {
    /// Independent draws from `[0, 1)`.
    UniformRandom,
    /// All zeros.
    Zeros,
}

impl WeightInit {
    /// Builds `num_features + 1` weights; index 0 is the bias.
    pub fn weights<R: Rng + ?Sized>(self, num_features: usize, rng: &mut R) -> Array1<f64> {
        let len = num_features + 1;
        match self {
            WeightInit::UniformRandom => {
                let uniform = Uniform::new(0.0, 1.0);
                (0..len).map(|_| rng.sample(uniform)).collect()
            }
            WeightInit::Zeros => Array1::zeros(len),
        }
    }
}
