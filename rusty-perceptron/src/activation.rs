use ndarray::{Array1, ArrayView1};

/// Raw linear score `w · x`.
pub fn transfer(w: ArrayView1<f64>, x: ArrayView1<f64>) -> f64 {
    w.dot(&x)
}

/// Heaviside step. A score of exactly zero counts as the positive class.
pub fn step(score: f64) -> f64 {
    if score >= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Prepends the constant bias input.
pub fn augment(x: ArrayView1<f64>) -> Array1<f64> {
    let mut augmented = Array1::ones(x.len() + 1);
    augmented.slice_mut(ndarray::s![1..]).assign(&x);
    augmented
}
