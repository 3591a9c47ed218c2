//! Gaussian point clouds for demonstrations.

use ndarray::{concatenate, Array1, Array2, Axis};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{PerceptronError, Result};

/// One labeled cloud of `count` points drawn from `N(mean, covariance)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSpec {
    pub mean: Array1<f64>,
    pub covariance: Array2<f64>,
    pub count: usize,
    pub label: u8,
}

impl ClusterSpec {
    /// Isotropic cluster with unit variance around `mean`.
    pub fn isotropic(mean: Array1<f64>, count: usize, label: u8) -> Self {
        let dim = mean.len();
        Self {
            mean,
            covariance: Array2::eye(dim),
            count,
            label,
        }
    }
}

/// Source of demonstration points.
pub trait ClusterSampler {
    /// A `count x dim` matrix of points for one cluster.
    fn sample(&mut self, spec: &ClusterSpec) -> Result<Array2<f64>>;

    /// All clusters stacked in order, with a parallel label vector.
    fn sample_all(&mut self, specs: &[ClusterSpec]) -> Result<(Array2<f64>, Vec<u8>)> {
        let mut blocks = Vec::with_capacity(specs.len());
        let mut labels = Vec::new();
        for spec in specs {
            blocks.push(self.sample(spec)?);
            labels.extend(std::iter::repeat(spec.label).take(spec.count));
        }
        let views: Vec<_> = blocks.iter().map(|b| b.view()).collect();
        let points = concatenate(Axis(0), &views).map_err(|e| {
            PerceptronError::InvalidInput(format!("clusters have different dimensions: {}", e))
        })?;
        Ok((points, labels))
    }
}

/// Multivariate normal sampler, `L·z + mean` with `L` the Cholesky factor of
/// the covariance and `z ~ N(0, I)`.
pub struct GaussianSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> GaussianSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ClusterSampler for GaussianSampler<R> {
    fn sample(&mut self, spec: &ClusterSpec) -> Result<Array2<f64>> {
        let dim = spec.mean.len();
        if spec.covariance.dim() != (dim, dim) {
            return Err(PerceptronError::InvalidInput(format!(
                "covariance must be {}x{}, got {:?}",
                dim,
                dim,
                spec.covariance.dim()
            )));
        }
        let tril = cholesky(&spec.covariance)?;

        let mut points = Array2::zeros((spec.count, dim));
        for mut row in points.rows_mut() {
            let z: Array1<f64> = (0..dim)
                .map(|_| -> f64 { StandardNormal.sample(&mut self.rng) })
                .collect();
            row.assign(&(tril.dot(&z) + &spec.mean));
        }
        Ok(points)
    }
}

/// Lower triangular `L` with `L·Lᵀ = a`.
fn cholesky(a: &Array2<f64>) -> Result<Array2<f64>> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let sum: f64 = (0..j).map(|k| l[[i, k]] * l[[j, k]]).sum();
            if i == j {
                let d = a[[i, i]] - sum;
                if d.is_nan() || d <= 0.0 {
                    return Err(PerceptronError::InvalidInput(
                        "covariance is not positive definite".to_string(),
                    ));
                }
                l[[i, j]] = d.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }
    Ok(l)
}
