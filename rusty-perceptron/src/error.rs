//! Error types for the perceptron.

use thiserror::Error;

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, PerceptronError>;

/// Errors surfaced by the classifier and its collaborators.
///
/// Every variant is raised before any weight is touched, so a failed call
/// leaves the classifier exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerceptronError {
    /// A feature vector does not match the established dimensionality.
    #[error("Dimensionality mismatch: expected {expected} features, got {actual}")]
    DimensionalityMismatch { expected: usize, actual: usize },
    /// Prediction or visualization was requested before any training signal.
    #[error("Model has not observed any training data yet")]
    UninitializedModel,
    /// Non-positive epoch count or step size.
    #[error("Invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),
    /// Labels must be 0 or 1.
    #[error("Invalid label {0}: labels must be 0 or 1")]
    InvalidLabel(u8),
    /// Batch matrix and label vector disagree on the number of examples.
    #[error("Shape mismatch: design matrix has {rows} rows but {labels} labels were given")]
    ShapeMismatch { rows: usize, labels: usize },
    /// Batch training needs at least one example.
    #[error("Training set is empty")]
    EmptyTrainingSet,
    /// Invalid input data.
    #[error("Invalid input data: {0}")]
    InvalidInput(String),
    /// An error occurred during plotting.
    #[error("Plotting error: {0}")]
    Plotting(String),
}
